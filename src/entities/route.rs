use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A computed driving route. Routes are derived from the upstream
/// directions service and are not persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub distance_meters: f64,
    pub travel_time_seconds: f64,
    pub path: Vec<Coordinates>,
}
