use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, Place, PlaceDraft, Placemark, Resolution, Route};
use crate::error::Error;
use crate::view::SortKey;

#[async_trait]
pub trait PlaceAPI {
    async fn create_place(&self, draft: PlaceDraft) -> Result<Place, Error>;
    async fn find_place(&self, id: Uuid) -> Result<Place, Error>;
    async fn replace_place(&self, id: Uuid, draft: PlaceDraft) -> Result<Place, Error>;
    async fn delete_place(&self, id: Uuid) -> Result<(), Error>;
    async fn list_places(&self) -> Result<Vec<Place>, Error>;
    async fn browse_places(
        &self,
        key: SortKey,
        order: bool,
        search: Option<String>,
    ) -> Result<Vec<Place>, Error>;
}

#[async_trait]
pub trait GeocodingAPI {
    async fn resolve_address(&self, address: String) -> Result<Resolution<Placemark>, Error>;
    async fn resolve_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<Resolution<Placemark>, Error>;
    async fn locate_place(&self, id: Uuid) -> Result<Resolution<Placemark>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn create_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Resolution<Route>, Error>;
    async fn route_to_place(
        &self,
        origin: Coordinates,
        id: Uuid,
    ) -> Result<Resolution<Route>, Error>;
}

pub trait API: PlaceAPI + GeocodingAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
