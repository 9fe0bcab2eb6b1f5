//! Geographic point type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing a point from invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

impl InvalidPoint {
    /// Returns the reason the point was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A (latitude, longitude) pair in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within
/// `[-180, 180]`; both are finite. Any `Point` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use jeepney_server::domain::Point;
///
/// let p = Point::new(8.4754, 124.6421).unwrap();
/// assert_eq!(p.lat(), 8.4754);
/// assert_eq!(p.lng(), 124.6421);
///
/// assert!(Point::new(91.0, 0.0).is_err());
/// assert!(Point::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidPoint> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidPoint {
                reason: "coordinates must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidPoint {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Parse a point from `"lat,lng"` text, as used in query strings.
    pub fn parse(s: &str) -> Result<Self, InvalidPoint> {
        let (lat, lng) = s.split_once(',').ok_or(InvalidPoint {
            reason: "expected \"lat,lng\"",
        })?;
        let lat: f64 = lat.trim().parse().map_err(|_| InvalidPoint {
            reason: "latitude is not a number",
        })?;
        let lng: f64 = lng.trim().parse().map_err(|_| InvalidPoint {
            reason: "longitude is not a number",
        })?;
        Self::new(lat, lng)
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns the point as a `[lat, lng]` array.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = InvalidPoint;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lat, lng)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

/// `geo` points are `(x, y)`, i.e. `(lng, lat)`.
impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.lng, p.lat)
    }
}

impl TryFrom<geo::Point<f64>> for Point {
    type Error = InvalidPoint;

    fn try_from(p: geo::Point<f64>) -> Result<Self, Self::Error> {
        Self::new(p.y(), p.x())
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_points() {
        assert!(Point::new(0.0, 0.0).is_ok());
        assert!(Point::new(8.5, 124.63).is_ok());
        assert!(Point::new(-90.0, -180.0).is_ok());
        assert!(Point::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Point::new(90.0001, 0.0).is_err());
        assert!(Point::new(-91.0, 0.0).is_err());
        assert!(Point::new(0.0, 180.5).is_err());
        assert!(Point::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::INFINITY).is_err());
        assert!(Point::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn parse_query_text() {
        let p = Point::parse("8.501, 124.632").unwrap();
        assert_eq!(p, Point::new(8.501, 124.632).unwrap());

        assert!(Point::parse("8.501").is_err());
        assert!(Point::parse("north,124.6").is_err());
        assert!(Point::parse("8.5,east").is_err());
        assert!(Point::parse("100,124.6").is_err());
    }

    #[test]
    fn display_rounds_to_five_places() {
        let p = Point::new(8.49, 124.64).unwrap();
        assert_eq!(p.to_string(), "8.49000, 124.64000");
    }

    #[test]
    fn serde_as_pair() {
        let p: Point = serde_json::from_str("[8.5, 124.63]").unwrap();
        assert_eq!(p, Point::new(8.5, 124.63).unwrap());
        assert_eq!(serde_json::to_string(&p).unwrap(), "[8.5,124.63]");

        assert!(serde_json::from_str::<Point>("[95.0, 124.63]").is_err());
        assert!(serde_json::from_str::<Point>("[8.5]").is_err());
    }

    #[test]
    fn geo_point_is_lng_lat() {
        let g = geo::Point::from(Point::new(8.5, 124.63).unwrap());
        assert_eq!(g.x(), 124.63);
        assert_eq!(g.y(), 8.5);

        assert_eq!(Point::try_from(g), Point::new(8.5, 124.63));
        assert!(Point::try_from(geo::Point::new(124.63, 95.0)).is_err());
    }

    #[test]
    fn error_display() {
        let err = Point::new(100.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid point: latitude must be within [-90, 90]"
        );
    }
}
