mod geocoding_api;
mod place_api;
mod route_api;

use sqlx::{Executor, Pool, Sqlite};
use tokio::sync::Mutex;

use crate::{api::API, error::Error};

type Database = Sqlite;

pub struct Catalog {
    pool: Pool<Database>,
    // serializes mutations; reads go straight to the pool
    write_lock: Mutex<()>,
}

impl Catalog {
    #[tracing::instrument(name = "Catalog::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // place catalog (KV store keyed by surrogate id, seq keeps
        // insertion order across deletes)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS places (seq INTEGER PRIMARY KEY AUTOINCREMENT, id TEXT NOT NULL UNIQUE, data TEXT NOT NULL)",
        )
        .await?;

        Ok(Self {
            pool,
            write_lock: Mutex::new(()),
        })
    }
}

impl API for Catalog {}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::api::PlaceAPI;
    use crate::db::CatalogPool;
    use crate::entities::PlaceDraft;
    use crate::view::SortKey;
    use tokio_test::block_on;

    fn new_catalog() -> Catalog {
        use std::sync::atomic::{AtomicU64, Ordering};

        // Each test op runs under its own `block_on` runtime; an in-memory
        // SQLite database is torn down when that runtime is dropped, so the
        // table created in `Catalog::new` would vanish before the next call.
        // Back each catalog with its own temp file so state survives across
        // runtimes while keeping tests isolated from one another.
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("myplaces-test-{}-{}.db", std::process::id(), n));
        let _ = std::fs::remove_file(&path);
        let uri = format!("sqlite://{}", path.display());

        let CatalogPool(pool) = block_on(CatalogPool::new(&uri, 1)).unwrap();

        block_on(Catalog::new(pool)).unwrap()
    }

    fn draft(name: &str, location: Option<&str>, category: Option<&str>, rating: i64) -> PlaceDraft {
        PlaceDraft {
            name: name.into(),
            location: location.map(Into::into),
            category: category.map(Into::into),
            image: None,
            rating,
        }
    }

    #[test]
    fn list_returns_every_added_place_in_insertion_order() {
        let catalog = new_catalog();

        let first = block_on(catalog.create_place(draft("Cafe Bloom", Some("Main St"), Some("cafe"), 4))).unwrap();
        let second = block_on(catalog.create_place(draft("Park View", Some("Oak Ave"), Some("park"), 2))).unwrap();
        let third = block_on(catalog.create_place(draft("Bloom Diner", Some("2nd St"), Some("diner"), 4))).unwrap();

        let places = block_on(catalog.list_places()).unwrap();

        assert_eq!(places.len(), 3);
        assert_eq!(
            places.iter().map(|place| place.id).collect::<Vec<_>>(),
            [first.id, second.id, third.id]
        );
    }

    #[test]
    fn duplicates_are_permitted_and_distinct() {
        let catalog = new_catalog();

        let first = block_on(catalog.create_place(draft("Cafe Bloom", None, None, 4))).unwrap();
        let second = block_on(catalog.create_place(draft("Cafe Bloom", None, None, 4))).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(block_on(catalog.list_places()).unwrap().len(), 2);
    }

    #[test]
    fn find_round_trips_the_stored_fields() {
        let catalog = new_catalog();

        let created = block_on(catalog.create_place(PlaceDraft {
            name: "Cafe Bloom".into(),
            location: Some("Main St".into()),
            category: Some("cafe".into()),
            image: Some(vec![0xff, 0xd8, 0xff]),
            rating: 4,
        }))
        .unwrap();

        let found = block_on(catalog.find_place(created.id)).unwrap();

        assert_eq!(found.name, "Cafe Bloom");
        assert_eq!(found.location.as_deref(), Some("Main St"));
        assert_eq!(found.category.as_deref(), Some("cafe"));
        assert_eq!(found.image.as_deref(), Some(&[0xff, 0xd8, 0xff][..]));
        assert_eq!(found.rating, 4);
        assert_eq!(found.created_at, created.created_at);
    }

    #[test]
    fn find_unknown_id_is_not_found() {
        let catalog = new_catalog();

        let err = block_on(catalog.find_place(uuid::Uuid::new_v4())).unwrap_err();

        assert_eq!(err.code, 102);
    }

    #[test]
    fn delete_removes_exactly_one_place() {
        let catalog = new_catalog();

        let keep = block_on(catalog.create_place(draft("Park View", None, None, 2))).unwrap();
        let gone = block_on(catalog.create_place(draft("Cafe Bloom", None, None, 4))).unwrap();

        block_on(catalog.delete_place(gone.id)).unwrap();

        let places = block_on(catalog.list_places()).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, keep.id);
    }

    #[test]
    fn second_delete_is_not_found_and_leaves_the_store_unchanged() {
        let catalog = new_catalog();

        let place = block_on(catalog.create_place(draft("Cafe Bloom", None, None, 4))).unwrap();
        block_on(catalog.create_place(draft("Park View", None, None, 2))).unwrap();

        block_on(catalog.delete_place(place.id)).unwrap();
        let err = block_on(catalog.delete_place(place.id)).unwrap_err();

        assert_eq!(err.code, 102);
        assert_eq!(block_on(catalog.list_places()).unwrap().len(), 1);
    }

    #[test]
    fn replace_keeps_identity_and_insertion_position() {
        let catalog = new_catalog();

        let place = block_on(catalog.create_place(draft("Cafe Bloom", Some("Main St"), Some("cafe"), 4))).unwrap();
        block_on(catalog.create_place(draft("Park View", Some("Oak Ave"), Some("park"), 2))).unwrap();

        let replaced = block_on(catalog.replace_place(
            place.id,
            draft("Cafe Bloom", Some("Elm St"), Some("cafe"), 5),
        ))
        .unwrap();

        assert_eq!(replaced.id, place.id);
        assert_eq!(replaced.created_at, place.created_at);
        assert_eq!(replaced.location.as_deref(), Some("Elm St"));
        assert_eq!(replaced.rating, 5);

        let places = block_on(catalog.list_places()).unwrap();
        assert_eq!(places[0].id, place.id);
        assert_eq!(places[0].rating, 5);
    }

    #[test]
    fn replace_unknown_id_is_not_found() {
        let catalog = new_catalog();

        let err = block_on(catalog.replace_place(
            uuid::Uuid::new_v4(),
            draft("Cafe Bloom", None, None, 4),
        ))
        .unwrap_err();

        assert_eq!(err.code, 102);
    }

    #[test]
    fn browse_sorts_then_filters() {
        let catalog = new_catalog();

        block_on(catalog.create_place(draft("Cafe Bloom", Some("Main St"), Some("cafe"), 4))).unwrap();
        block_on(catalog.create_place(draft("Park View", Some("Oak Ave"), Some("park"), 2))).unwrap();
        block_on(catalog.create_place(draft("Bloom Diner", Some("2nd St"), Some("diner"), 4))).unwrap();

        let by_rating = block_on(catalog.browse_places(SortKey::Rating, false, None)).unwrap();
        assert_eq!(
            by_rating.iter().map(|place| place.name.as_str()).collect::<Vec<_>>(),
            ["Cafe Bloom", "Bloom Diner", "Park View"]
        );

        let filtered = block_on(catalog.browse_places(SortKey::Rating, false, Some("bloom".into()))).unwrap();
        assert_eq!(
            filtered.iter().map(|place| place.name.as_str()).collect::<Vec<_>>(),
            ["Cafe Bloom", "Bloom Diner"]
        );

        let by_name = block_on(catalog.browse_places(SortKey::Name, true, None)).unwrap();
        assert_eq!(
            by_name.iter().map(|place| place.name.as_str()).collect::<Vec<_>>(),
            ["Park View", "Cafe Bloom", "Bloom Diner"]
        );
    }
}
