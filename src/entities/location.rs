use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

/// A geocoding result: a map position plus the address text it resolved
/// from or to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Placemark {
    pub coordinates: Coordinates,
    pub address: String,
}

/// Outcome of a best-effort upstream lookup. A missing result is a value
/// to handle, not an error to propagate.
#[derive(Clone, Debug)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}
