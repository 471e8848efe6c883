//! Canonical geometry from untyped database values.
//!
//! A geometry column may come back as a GeoJSON object, as a string holding
//! that same JSON, or as WKT text. [`parse_geometry`] accepts all three and
//! answers `None` for anything it cannot read: many records simply have no
//! computed geometry yet, so absence is not an error.
//!
//! Precedence:
//! 1. `null` or an empty string: `None`.
//! 2. Objects: `Point`, then `LineString`, then `MultiLineString`.
//! 3. Strings: JSON-decoded and tested as objects, then WKT `POINT`, then
//!    WKT `LINESTRING`.

use crate::core::coordinate::is_finite_pair;
use crate::core::strategy::{first_match, Strategy};
use crate::core::wkt;
use crate::domain::model::{Geometry, Position};
use serde_json::Value;

const OBJECT_STRATEGIES: &[Strategy<Value, Geometry>] = &[
    Strategy::new("geojson_point", point_object),
    Strategy::new("geojson_line_string", line_string_object),
    Strategy::new("geojson_multi_line_string", multi_line_string_object),
];

const TEXT_STRATEGIES: &[Strategy<str, Geometry>] = &[
    Strategy::new("json_encoded", json_encoded),
    Strategy::new("wkt_point", wkt_point),
    Strategy::new("wkt_line_string", wkt_line_string),
];

pub fn parse_geometry(input: &Value) -> Option<Geometry> {
    match input {
        Value::Object(_) => parse_geometry_object(input),
        Value::String(text) => parse_geometry_str(text),
        _ => None,
    }
}

/// Entry point for raw text (JSON or WKT).
pub fn parse_geometry_str(text: &str) -> Option<Geometry> {
    if text.is_empty() {
        return None;
    }
    first_match(text, TEXT_STRATEGIES)
}

fn parse_geometry_object(value: &Value) -> Option<Geometry> {
    if !value.is_object() {
        return None;
    }
    first_match(value, OBJECT_STRATEGIES)
}

/// Exactly two JSON numbers, both finite.
fn position(value: &Value) -> Option<Position> {
    match value.as_array()?.as_slice() {
        [a, b] => {
            let lon = a.as_f64()?;
            let lat = b.as_f64()?;
            is_finite_pair(lon, lat).then_some([lon, lat])
        }
        _ => None,
    }
}

/// Every entry a valid position and at least two of them.
fn line(value: &Value) -> Option<Vec<Position>> {
    let positions = value
        .as_array()?
        .iter()
        .map(position)
        .collect::<Option<Vec<_>>>()?;
    (positions.len() >= 2).then_some(positions)
}

fn typed_coordinates<'a>(value: &'a Value, kind: &str) -> Option<&'a Value> {
    if value.get("type")?.as_str()? != kind {
        return None;
    }
    value.get("coordinates")
}

fn point_object(value: &Value) -> Option<Geometry> {
    let coordinates = position(typed_coordinates(value, "Point")?)?;
    Some(Geometry::Point { coordinates })
}

fn line_string_object(value: &Value) -> Option<Geometry> {
    let coordinates = line(typed_coordinates(value, "LineString")?)?;
    Some(Geometry::LineString { coordinates })
}

fn multi_line_string_object(value: &Value) -> Option<Geometry> {
    let coordinates = typed_coordinates(value, "MultiLineString")?
        .as_array()?
        .iter()
        .map(line)
        .collect::<Option<Vec<_>>>()?;
    if coordinates.is_empty() {
        return None;
    }
    Some(Geometry::MultiLineString { coordinates })
}

fn json_encoded(text: &str) -> Option<Geometry> {
    match serde_json::from_str::<Value>(text) {
        Ok(decoded) => parse_geometry_object(&decoded),
        Err(e) => {
            tracing::trace!("geometry text is not JSON, trying WKT: {}", e);
            None
        }
    }
}

fn wkt_point(text: &str) -> Option<Geometry> {
    wkt::decode_point(text).map(|coordinates| Geometry::Point { coordinates })
}

fn wkt_line_string(text: &str) -> Option<Geometry> {
    wkt::decode_line_string(text).map(|coordinates| Geometry::LineString { coordinates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_empty_are_absent() {
        assert_eq!(parse_geometry(&Value::Null), None);
        assert_eq!(parse_geometry(&json!("")), None);
        assert_eq!(parse_geometry(&json!(42)), None);
        assert_eq!(parse_geometry(&json!([[-77.0, -12.0]])), None);
    }

    #[test]
    fn test_point_object() {
        let geom = parse_geometry(&json!({"type": "Point", "coordinates": [-77.0, -12.0]}));
        assert_eq!(
            geom,
            Some(Geometry::Point {
                coordinates: [-77.0, -12.0]
            })
        );
    }

    #[test]
    fn test_point_object_requires_exactly_two_numbers() {
        assert_eq!(point_object(&json!({"type": "Point", "coordinates": [1.0]})), None);
        assert_eq!(
            point_object(&json!({"type": "Point", "coordinates": [1.0, 2.0, 3.0]})),
            None
        );
        assert_eq!(
            point_object(&json!({"type": "Point", "coordinates": ["1", "2"]})),
            None
        );
        assert_eq!(point_object(&json!({"type": "point", "coordinates": [1, 2]})), None);
    }

    #[test]
    fn test_line_string_object() {
        let geom = line_string_object(&json!({
            "type": "LineString",
            "coordinates": [[-77.0, -12.0], [-77.1, -12.1], [-77.2, -12.2]]
        }));
        assert_eq!(
            geom,
            Some(Geometry::LineString {
                coordinates: vec![[-77.0, -12.0], [-77.1, -12.1], [-77.2, -12.2]]
            })
        );
    }

    #[test]
    fn test_short_line_string_object_is_absent() {
        let single = json!({"type": "LineString", "coordinates": [[-77.0, -12.0]]});
        assert_eq!(parse_geometry(&single), None);

        let bad_entry = json!({"type": "LineString", "coordinates": [[-77.0, -12.0], [1.0]]});
        assert_eq!(parse_geometry(&bad_entry), None);
    }

    #[test]
    fn test_multi_line_string_object() {
        let geom = multi_line_string_object(&json!({
            "type": "MultiLineString",
            "coordinates": [
                [[-77.0, -12.0], [-77.1, -12.1]],
                [[-77.2, -12.2], [-77.3, -12.3]]
            ]
        }));
        assert_eq!(
            geom,
            Some(Geometry::MultiLineString {
                coordinates: vec![
                    vec![[-77.0, -12.0], [-77.1, -12.1]],
                    vec![[-77.2, -12.2], [-77.3, -12.3]],
                ]
            })
        );
    }

    #[test]
    fn test_multi_line_string_rejects_short_segment_and_empty() {
        let short = json!({
            "type": "MultiLineString",
            "coordinates": [[[-77.0, -12.0], [-77.1, -12.1]], [[-77.2, -12.2]]]
        });
        assert_eq!(multi_line_string_object(&short), None);

        let empty = json!({"type": "MultiLineString", "coordinates": []});
        assert_eq!(multi_line_string_object(&empty), None);
    }

    #[test]
    fn test_json_string_matches_object_form() {
        let object = json!({"type": "Point", "coordinates": [-77.0, -12.0]});
        let text = json!(r#"{"type":"Point","coordinates":[-77.0,-12.0]}"#);
        assert_eq!(parse_geometry(&text), parse_geometry(&object));
        assert!(parse_geometry(&text).is_some());
    }

    #[test]
    fn test_json_string_with_unknown_shape_is_absent() {
        assert_eq!(json_encoded(r#"{"type":"Polygon","coordinates":[]}"#), None);
        assert_eq!(parse_geometry_str(r#"{"type":"Polygon","coordinates":[]}"#), None);
    }

    #[test]
    fn test_wkt_strings() {
        assert_eq!(
            parse_geometry_str("POINT(-77.04 -12.05)"),
            Some(Geometry::Point {
                coordinates: [-77.04, -12.05]
            })
        );
        assert_eq!(
            parse_geometry_str("LINESTRING(-77.0 -12.0, -77.1 -12.1)"),
            Some(Geometry::LineString {
                coordinates: vec![[-77.0, -12.0], [-77.1, -12.1]]
            })
        );
        assert_eq!(parse_geometry_str("LINESTRING(-77.0 -12.0)"), None);
        assert_eq!(parse_geometry_str("POLYGON((0 0, 1 0, 1 1, 0 0))"), None);
    }

    #[test]
    fn test_multilinestring_decodes_only_from_geojson() {
        let wkt = json!("MULTILINESTRING((-77.0 -12.0, -77.1 -12.1), (-77.2 -12.2, -77.3 -12.3))");
        let object = json!({
            "type": "MultiLineString",
            "coordinates": [
                [[-77.0, -12.0], [-77.1, -12.1]],
                [[-77.2, -12.2], [-77.3, -12.3]]
            ]
        });
        assert_eq!(parse_geometry(&wkt), None);
        assert!(parse_geometry(&object).is_some());
    }
}
