//! Minimal WKT decoding for the two shapes the backend emits as text.
//!
//! Only `POINT` and `LINESTRING` are recognized. `MULTILINESTRING` text is
//! deliberately left undecoded; multi-segment lines only arrive as GeoJSON.

use crate::core::coordinate::is_finite_pair;
use crate::domain::model::Position;
use regex::Regex;
use std::sync::LazyLock;

static POINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)POINT\s*\(\s*([-0-9.]+)\s+([-0-9.]+)\s*\)").expect("valid POINT pattern")
});

static LINESTRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)LINESTRING\s*\((.+)\)").expect("valid LINESTRING pattern")
});

fn has_keyword(text: &str, keyword: &str) -> bool {
    text.get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decodes `POINT(lon lat)` into a `[lon, lat]` position.
pub fn decode_point(text: &str) -> Option<Position> {
    let wkt = text.trim();
    if !has_keyword(wkt, "POINT") {
        return None;
    }

    let caps = POINT_RE.captures(wkt)?;
    let lon = parse_number(&caps[1])?;
    let lat = parse_number(&caps[2])?;
    Some([lon, lat])
}

/// Decodes `LINESTRING(lon lat, ...)`. Pairs that do not parse are dropped;
/// fewer than two surviving positions means no line.
pub fn decode_line_string(text: &str) -> Option<Vec<Position>> {
    let wkt = text.trim();
    if !has_keyword(wkt, "LINESTRING") {
        return None;
    }

    let caps = LINESTRING_RE.captures(wkt)?;
    let coordinates: Vec<Position> = caps[1]
        .split(',')
        .filter_map(|pair| {
            let mut tokens = pair.split_whitespace();
            let lon = tokens.next().and_then(parse_number)?;
            let lat = tokens.next().and_then(parse_number)?;
            is_finite_pair(lon, lat).then_some([lon, lat])
        })
        .collect();

    if coordinates.len() >= 2 {
        Some(coordinates)
    } else {
        None
    }
}
