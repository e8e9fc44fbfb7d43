use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::{Coordinates, Placemark, Resolution, Route},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodingResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(latlng: LatLng) -> Self {
        Coordinates {
            latitude: latlng.lat,
            longitude: latlng.lng,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
    start_location: LatLng,
    steps: Vec<Step>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Step {
    end_location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

#[tracing::instrument]
pub async fn geocode(address: String) -> Result<Resolution<Placemark>, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/geocode/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("address", address)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Vec<GeocodingResult>> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    let results = data.results.ok_or_else(|| upstream_error())?;

    Ok(match results.into_iter().next() {
        Some(result) => Resolution::Resolved(Placemark {
            coordinates: result.geometry.location.into(),
            address: result.formatted_address,
        }),
        None => Resolution::Unresolved,
    })
}

#[tracing::instrument]
pub async fn reverse_geocode(coordinates: Coordinates) -> Result<Resolution<Placemark>, Error> {
    let latlng: String = coordinates.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/geocode/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("latlng", latlng)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Vec<GeocodingResult>> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    let results = data.results.ok_or_else(|| upstream_error())?;

    Ok(match results.into_iter().next() {
        Some(result) => Resolution::Resolved(Placemark {
            coordinates: result.geometry.location.into(),
            address: result.formatted_address,
        }),
        None => Resolution::Unresolved,
    })
}

#[tracing::instrument]
pub async fn directions(
    origin: Coordinates,
    destination: Coordinates,
) -> Result<Resolution<Route>, Error> {
    let origin: String = origin.into();
    let destination: String = destination.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/directions/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origin", origin)])
        .query(&[("destination", destination)])
        .query(&[("mode", "driving")])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Vec<DirectionsRoute>> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    let routes = data.routes.ok_or_else(|| upstream_error())?;

    let route = match routes.into_iter().next() {
        Some(route) => route,
        None => return Ok(Resolution::Unresolved),
    };

    let mut distance_meters = 0.0;
    let mut travel_time_seconds = 0.0;
    let mut path = Vec::new();

    for leg in route.legs {
        distance_meters += leg.distance.value;
        travel_time_seconds += leg.duration.value;

        path.push(leg.start_location.into());

        for step in leg.steps {
            path.push(step.end_location.into());
        }
    }

    Ok(Resolution::Resolved(Route {
        distance_meters,
        travel_time_seconds,
        path,
    }))
}
