use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Coordinates, Resolution, Route};
use crate::error::{not_resolved_error, Error};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: Coordinates,
    destination: Coordinates,
}

#[derive(Serialize, Deserialize)]
pub struct ToPlaceParams {
    latitude: f64,
    longitude: f64,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Route>, Error> {
    let resolution = api.create_route(params.origin, params.destination).await?;

    into_response(resolution)
}

pub async fn to_place(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Query(params): Query<ToPlaceParams>,
) -> Result<Json<Route>, Error> {
    let origin = Coordinates {
        latitude: params.latitude,
        longitude: params.longitude,
    };

    let resolution = api.route_to_place(origin, id).await?;

    into_response(resolution)
}

fn into_response(resolution: Resolution<Route>) -> Result<Json<Route>, Error> {
    match resolution {
        Resolution::Resolved(route) => Ok(route.into()),
        Resolution::Unresolved => Err(not_resolved_error()),
    }
}
