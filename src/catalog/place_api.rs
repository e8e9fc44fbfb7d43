use super::Catalog;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, Acquire, Executor, Row};
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    entities::{Place, PlaceDraft},
    error::{not_found_error, Error},
    view,
    view::SortKey,
};

#[async_trait]
impl PlaceAPI for Catalog {
    #[tracing::instrument(skip(self, draft))]
    async fn create_place(&self, draft: PlaceDraft) -> Result<Place, Error> {
        let place = Place::new(draft);

        let _guard = self.write_lock.lock().await;
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO places (id, data) VALUES ($1, $2)")
                .bind(&place.id)
                .bind(Json(&place)),
        )
        .await?;

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, id: Uuid) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM places WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error())?;
        let Json(place) = result.try_get("data")?;

        Ok(place)
    }

    #[tracing::instrument(skip(self, draft))]
    async fn replace_place(&self, id: Uuid, draft: PlaceDraft) -> Result<Place, Error> {
        let _guard = self.write_lock.lock().await;
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let maybe_result = tx
            .fetch_optional(sqlx::query("SELECT data FROM places WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error())?;
        let Json::<Place>(mut place) = result.try_get("data")?;

        place.replace(draft);

        tx.execute(
            sqlx::query("UPDATE places SET data = $2 WHERE id = $1")
                .bind(&id)
                .bind(Json(&place)),
        )
        .await?;

        tx.commit().await?;

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_place(&self, id: Uuid) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM places WHERE id = $1").bind(&id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error());
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(sqlx::query("SELECT data FROM places ORDER BY seq"));

        let mut places = Vec::new();

        while let Some(row) = results.try_next().await? {
            let Json(place) = row.try_get("data")?;
            places.push(place);
        }

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn browse_places(
        &self,
        key: SortKey,
        order: bool,
        search: Option<String>,
    ) -> Result<Vec<Place>, Error> {
        let mut places = self.list_places().await?;

        view::sort_places(&mut places, key, order);

        match search {
            Some(search) => Ok(view::filter_places(&places, &search)),
            None => Ok(places),
        }
    }
}
