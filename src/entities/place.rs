use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub image: Option<Vec<u8>>,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

/// The caller-settable fields of a place, used for both creation and
/// full replacement. The rating is stored as given; clients render it
/// as five star toggles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceDraft {
    #[serde(default)]
    pub name: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub image: Option<Vec<u8>>,
    #[serde(default)]
    pub rating: i64,
}

impl Place {
    pub fn new(draft: PlaceDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            location: draft.location,
            category: draft.category,
            image: draft.image,
            rating: draft.rating,
            created_at: Utc::now(),
        }
    }

    // full replacement; there is no partial-field update
    pub fn replace(&mut self, draft: PlaceDraft) {
        self.name = draft.name;
        self.location = draft.location;
        self.category = draft.category;
        self.image = draft.image;
        self.rating = draft.rating;
    }
}
