/// Both values finite, latitude in [-90, 90] and longitude in [-180, 180].
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    is_finite_pair(lat, lon) && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Finiteness only, no range check. Geometry coordinates may be projected.
pub fn is_finite_pair(a: f64, b: f64) -> bool {
    a.is_finite() && b.is_finite()
}
