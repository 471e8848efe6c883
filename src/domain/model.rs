use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair, GeoJSON order.
pub type Position = [f64; 2];

/// Canonical geometry. Only the parser in `core::geometry` builds these, so
/// every value holds finite coordinates and every line has at least two
/// positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
        }
    }

    pub fn as_point(&self) -> Option<Position> {
        match self {
            Geometry::Point { coordinates } => Some(*coordinates),
            _ => None,
        }
    }
}

/// Result of normalizing a location-service response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// WKT form stored for a fault, `POINT(lon lat)`.
    pub fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.lon, self.lat)
    }

    pub fn to_geometry(&self) -> Geometry {
        Geometry::Point {
            coordinates: [self.lon, self.lat],
        }
    }
}

/// Coordinates handed to the presentation layer. Both values are `None`
/// unless `has_valid_coordinates` is set; a missing geometry never turns
/// into `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinCoordinates {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub has_valid_coordinates: bool,
}

impl PinCoordinates {
    pub fn missing() -> Self {
        Self {
            lat: None,
            lon: None,
            has_valid_coordinates: false,
        }
    }

    /// Only a `Point` inside the lat/lon ranges yields a pin.
    pub fn from_geometry(geometry: Option<&Geometry>) -> Self {
        match geometry.and_then(Geometry::as_point) {
            Some([lon, lat]) if crate::core::coordinate::is_valid_coordinate(lat, lon) => Self {
                lat: Some(lat),
                lon: Some(lon),
                has_valid_coordinates: true,
            },
            _ => Self::missing(),
        }
    }
}

/// A fault whose position has been computed and is ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedFault {
    pub linea_id: String,
    pub km: f64,
    pub location: Location,
    pub geom_wkt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geometry_serializes_as_geojson() {
        let line = Geometry::LineString {
            coordinates: vec![[-77.0, -12.0], [-77.1, -12.1]],
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({"type": "LineString", "coordinates": [[-77.0, -12.0], [-77.1, -12.1]]})
        );
        assert_eq!(line.kind(), "LineString");
        assert_eq!(line.as_point(), None);
    }

    #[test]
    fn test_location_to_wkt_swaps_order() {
        let location = Location::new(-12.05, -77.04);
        assert_eq!(location.to_wkt(), "POINT(-77.04 -12.05)");
        assert_eq!(location.to_geometry().as_point(), Some([-77.04, -12.05]));
    }

    #[test]
    fn test_pin_from_valid_point() {
        let point = Geometry::Point {
            coordinates: [-77.04, -12.05],
        };
        let pin = PinCoordinates::from_geometry(Some(&point));
        assert!(pin.has_valid_coordinates);
        assert_eq!(pin.lat, Some(-12.05));
        assert_eq!(pin.lon, Some(-77.04));
    }

    #[test]
    fn test_pin_without_geometry_is_not_zero_zero() {
        let pin = PinCoordinates::from_geometry(None);
        assert!(!pin.has_valid_coordinates);
        assert_eq!(pin.lat, None);
        assert_eq!(pin.lon, None);
        assert_eq!(
            serde_json::to_value(pin).unwrap(),
            json!({"lat": null, "lon": null, "hasValidCoordinates": false})
        );
    }

    #[test]
    fn test_pin_rejects_out_of_range_and_lines() {
        let projected = Geometry::Point {
            coordinates: [500000.0, 8650000.0],
        };
        assert!(!PinCoordinates::from_geometry(Some(&projected)).has_valid_coordinates);

        let line = Geometry::LineString {
            coordinates: vec![[-77.0, -12.0], [-77.1, -12.1]],
        };
        assert!(!PinCoordinates::from_geometry(Some(&line)).has_valid_coordinates);
    }
}
