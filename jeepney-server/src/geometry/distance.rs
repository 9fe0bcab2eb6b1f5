//! Great-circle distances.

use geo::{Distance, Haversine};

use crate::domain::Point;

/// Mean Earth radius in meters (IUGG), the radius `geo`'s haversine uses.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance between two points, in meters.
///
/// # Examples
///
/// ```
/// use jeepney_server::domain::Point;
/// use jeepney_server::geometry::distance_m;
///
/// let a = Point::new(8.50, 124.63).unwrap();
/// let b = Point::new(8.49, 124.63).unwrap();
///
/// // One hundredth of a degree of latitude is a little over a kilometre.
/// let d = distance_m(a, b);
/// assert!((d - 1111.95).abs() < 1.0);
/// ```
pub fn distance_m(a: Point, b: Point) -> f64 {
    Haversine.distance(geo::Point::from(a), geo::Point::from(b))
}

/// Cumulative length of a polyline, in meters.
///
/// Zero for fewer than two points.
pub fn polyline_length_m(line: &[Point]) -> f64 {
    line.windows(2).map(|w| distance_m(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng).unwrap()
    }

    #[test]
    fn zero_for_same_point() {
        let p = pt(8.5, 124.63);
        assert_eq!(distance_m(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_m(pt(0.0, 0.0), pt(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let at_equator = distance_m(pt(0.0, 0.0), pt(0.0, 0.01));
        let at_sixty = distance_m(pt(60.0, 0.0), pt(60.0, 0.01));
        assert!((at_sixty / at_equator - 0.5).abs() < 1e-3);
    }

    #[test]
    fn symmetric() {
        let a = pt(8.50, 124.63);
        let b = pt(8.47, 124.65);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points() {
        let d = distance_m(pt(0.0, 0.0), pt(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let line = [pt(8.50, 124.63), pt(8.49, 124.64), pt(8.48, 124.64)];
        let expected = distance_m(line[0], line[1]) + distance_m(line[1], line[2]);
        assert!((polyline_length_m(&line) - expected).abs() < 1e-9);
    }

    #[test]
    fn polyline_length_degenerate() {
        assert_eq!(polyline_length_m(&[]), 0.0);
        assert_eq!(polyline_length_m(&[pt(8.5, 124.6)]), 0.0);
    }
}
