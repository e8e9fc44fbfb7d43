use super::Catalog;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{GeocodingAPI, RouteAPI},
    entities::{Coordinates, Resolution, Route},
    error::Error,
    external::google_maps,
};

#[async_trait]
impl RouteAPI for Catalog {
    #[tracing::instrument(skip(self))]
    async fn create_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Resolution<Route>, Error> {
        google_maps::directions(origin, destination).await
    }

    #[tracing::instrument(skip(self))]
    async fn route_to_place(
        &self,
        origin: Coordinates,
        id: Uuid,
    ) -> Result<Resolution<Route>, Error> {
        let destination = match self.locate_place(id).await? {
            Resolution::Resolved(placemark) => placemark.coordinates,
            Resolution::Unresolved => return Ok(Resolution::Unresolved),
        };

        google_maps::directions(origin, destination).await
    }
}
