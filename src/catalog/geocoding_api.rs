use super::Catalog;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{GeocodingAPI, PlaceAPI},
    entities::{Coordinates, Placemark, Resolution},
    error::Error,
    external::google_maps,
};

#[async_trait]
impl GeocodingAPI for Catalog {
    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self, address: String) -> Result<Resolution<Placemark>, Error> {
        google_maps::geocode(address).await
    }

    #[tracing::instrument(skip(self))]
    async fn resolve_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<Resolution<Placemark>, Error> {
        google_maps::reverse_geocode(coordinates).await
    }

    #[tracing::instrument(skip(self))]
    async fn locate_place(&self, id: Uuid) -> Result<Resolution<Placemark>, Error> {
        let place = self.find_place(id).await?;

        // a place with no location text has no pin
        match place.location {
            Some(address) => google_maps::geocode(address).await,
            None => Ok(Resolution::Unresolved),
        }
    }
}
