use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Place, PlaceDraft};
use crate::error::Error;
use crate::view::SortKey;

#[derive(Serialize, Deserialize)]
pub struct BrowseParams {
    sort: Option<SortKey>,
    order: Option<bool>,
    search: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(draft): Json<PlaceDraft>,
) -> Result<Json<Place>, Error> {
    let place = api.create_place(draft).await?;

    Ok(place.into())
}

pub async fn index(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<Vec<Place>>, Error> {
    // the browse screen opens on rating-high-first with no filter
    let places = api
        .browse_places(
            params.sort.unwrap_or(SortKey::Rating),
            params.order.unwrap_or(false),
            params.search,
        )
        .await?;

    Ok(places.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(id).await?;

    Ok(place.into())
}

pub async fn replace(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PlaceDraft>,
) -> Result<Json<Place>, Error> {
    let place = api.replace_place(id, draft).await?;

    Ok(place.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<(), Error> {
    api.delete_place(id).await
}
