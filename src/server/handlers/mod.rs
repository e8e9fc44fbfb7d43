pub mod geocoding;
pub mod places;
pub mod routes;
