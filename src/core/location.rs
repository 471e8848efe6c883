//! Normalization of compute-fault-location responses.
//!
//! The function that computes a fault position does not have a fixed
//! response contract. Known shapes, in order of precedence:
//!
//! - `{lat, lon}`, `{lat, lng}`, `{latitude, longitude}`, at the top level,
//!   then under `data`, then under `location`
//! - `{geom: "POINT(lon lat)"}`, also under `wkt` or `geom_wkt`
//! - `{geom: {type: "Point", coordinates: [lon, lat]}}`, also under `geometry`
//!
//! Anything else is a [`GeoError::LocationFormat`] carrying the whole
//! payload, since the only way to diagnose a new shape is to see it.

use crate::core::coordinate::is_valid_coordinate;
use crate::core::strategy::{first_match, Strategy};
use crate::core::wkt;
use crate::domain::model::Location;
use crate::utils::error::{GeoError, Result};
use serde_json::Value;

const LAT_KEYS: &[&str] = &["lat", "latitude"];
const LON_KEYS: &[&str] = &["lon", "lng", "longitude"];
const WKT_KEYS: &[&str] = &["geom", "wkt", "geom_wkt"];
const GEOJSON_KEYS: &[&str] = &["geom", "geometry"];

const LOCATION_STRATEGIES: &[Strategy<Value, Location>] = &[
    Strategy::new("direct_fields", direct_fields),
    Strategy::new("wkt_field", wkt_field),
    Strategy::new("geojson_field", geojson_field),
];

pub fn extract_location(payload: &Value) -> Result<Location> {
    first_match(payload, LOCATION_STRATEGIES).ok_or_else(|| {
        tracing::warn!("Unrecognized location payload: {}", payload);
        GeoError::LocationFormat {
            payload: payload.clone(),
        }
    })
}

/// JSON numbers as-is, numeric strings parsed. Everything else, including
/// blank strings, is not a number.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// First key holding a non-null value.
fn first_present<'a>(scope: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| scope.get(*key))
        .find(|value| !value.is_null())
}

fn accept(lat: f64, lon: f64) -> Option<Location> {
    is_valid_coordinate(lat, lon).then_some(Location { lat, lon })
}

fn location_in_scope(scope: &Value) -> Option<Location> {
    let lat = coerce_number(first_present(scope, LAT_KEYS)?)?;
    let lon = coerce_number(first_present(scope, LON_KEYS)?)?;
    accept(lat, lon)
}

fn direct_fields(payload: &Value) -> Option<Location> {
    location_in_scope(payload)
        .or_else(|| payload.get("data").and_then(location_in_scope))
        .or_else(|| payload.get("location").and_then(location_in_scope))
}

fn wkt_field(payload: &Value) -> Option<Location> {
    let text = WKT_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))?;
    let [lon, lat] = wkt::decode_point(text)?;
    accept(lat, lon)
}

fn geojson_field(payload: &Value) -> Option<Location> {
    let geometry = GEOJSON_KEYS
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| value.is_object())?;
    if geometry.get("type")?.as_str()? != "Point" {
        return None;
    }

    let coordinates = geometry.get("coordinates")?.as_array()?;
    if coordinates.len() < 2 {
        return None;
    }
    let lon = coerce_number(&coordinates[0])?;
    let lat = coerce_number(&coordinates[1])?;
    accept(lat, lon)
}
