use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Coordinates, Placemark, Resolution};
use crate::error::{not_resolved_error, Error};

#[derive(Serialize, Deserialize)]
pub struct ResolveParams {
    address: String,
}

#[derive(Serialize, Deserialize)]
pub struct ReverseParams {
    latitude: f64,
    longitude: f64,
}

pub async fn resolve(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<Placemark>, Error> {
    let resolution = api.resolve_address(params.address).await?;

    into_response(resolution)
}

pub async fn reverse(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ReverseParams>,
) -> Result<Json<Placemark>, Error> {
    let coordinates = Coordinates {
        latitude: params.latitude,
        longitude: params.longitude,
    };

    let resolution = api.resolve_coordinates(coordinates).await?;

    into_response(resolution)
}

pub async fn locate(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Placemark>, Error> {
    let resolution = api.locate_place(id).await?;

    into_response(resolution)
}

// unresolved lookups leave the response body empty-handed, so they
// surface as 404 at this boundary
fn into_response(resolution: Resolution<Placemark>) -> Result<Json<Placemark>, Error> {
    match resolution {
        Resolution::Resolved(placemark) => Ok(placemark.into()),
        Resolution::Unresolved => Err(not_resolved_error()),
    }
}
