mod location;
mod place;
mod route;

pub use location::{Coordinates, Placemark, Resolution};
pub use place::{Place, PlaceDraft};
pub use route::Route;
