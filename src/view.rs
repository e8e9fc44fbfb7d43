use serde::{Deserialize, Serialize};

use crate::entities::Place;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Rating,
    Name,
}

/// Stable sort, so tied elements keep the store's enumeration order.
/// The order flag reads inverted between the two keys: `false` means
/// rating-high-first but name-A-first, matching the single A-Z/Z-A
/// toggle the original screen wires to both segments.
pub fn sort_places(places: &mut [Place], key: SortKey, order: bool) {
    match key {
        SortKey::Rating => {
            if order {
                places.sort_by(|a, b| a.rating.cmp(&b.rating));
            } else {
                places.sort_by(|a, b| b.rating.cmp(&a.rating));
            }
        }
        SortKey::Name => {
            if order {
                places.sort_by(|a, b| b.name.cmp(&a.name));
            } else {
                places.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
    }
}

/// Case-insensitive substring match over name, location and category.
/// An empty or whitespace-only search counts as "not filtering". The
/// input order is never rearranged.
pub fn filter_places(places: &[Place], search: &str) -> Vec<Place> {
    if search.trim().is_empty() {
        return places.to_vec();
    }

    let needle = search.to_lowercase();

    places
        .iter()
        .filter(|place| matches_search(place, &needle))
        .cloned()
        .collect()
}

fn matches_search(place: &Place, needle: &str) -> bool {
    let optional_contains = |field: &Option<String>| {
        field
            .as_ref()
            .map_or(false, |value| value.to_lowercase().contains(needle))
    };

    place.name.to_lowercase().contains(needle)
        || optional_contains(&place.location)
        || optional_contains(&place.category)
}
