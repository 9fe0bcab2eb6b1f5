//! Nearest point on a polyline.

use geo::{Coord, Euclidean, InterpolatableLine, Line, LineLocatePoint};

use crate::domain::{InvalidPoint, Point};

use super::distance::distance_m;

/// Candidates closer than this to the current best count as ties.
const TIE_TOLERANCE_M: f64 = 1e-6;

/// Errors from geometry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A polyline needs at least one segment
    #[error("polyline has {0} coordinate(s); at least 2 are required")]
    EmptyPolyline(usize),

    /// Interpolating along a segment left the coordinate range
    #[error(transparent)]
    InvalidPoint(#[from] InvalidPoint),
}

/// The closest point of a polyline to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// The closest point, lying on segment `segment_index`.
    pub point: Point,

    /// Index `i` of the segment `[P[i], P[i+1]]` containing `point`.
    pub segment_index: usize,

    /// Distance from the query to `point`, in meters.
    pub distance_m: f64,
}

/// Find the point of `line` closest to `query`.
///
/// Each segment is located in a local plane centred on the query, with the
/// position clamped to the segment's extent. Distances are then measured
/// with haversine. On ties the lowest segment index wins.
///
/// # Errors
///
/// Returns `GeometryError::EmptyPolyline` if `line` has fewer than two points.
///
/// # Examples
///
/// ```
/// use jeepney_server::domain::Point;
/// use jeepney_server::geometry::nearest_point_on_polyline;
///
/// let line = [
///     Point::new(8.50, 124.63).unwrap(),
///     Point::new(8.49, 124.64).unwrap(),
///     Point::new(8.48, 124.64).unwrap(),
/// ];
/// let query = Point::new(8.481, 124.641).unwrap();
///
/// let nearest = nearest_point_on_polyline(&line, query).unwrap();
/// assert_eq!(nearest.segment_index, 1);
/// assert!(nearest.distance_m < 150.0);
/// ```
pub fn nearest_point_on_polyline(
    line: &[Point],
    query: Point,
) -> Result<NearestPoint, GeometryError> {
    if line.len() < 2 {
        return Err(GeometryError::EmptyPolyline(line.len()));
    }

    let plane = LocalPlane::centred_on(query);
    let mut best: Option<NearestPoint> = None;

    for (segment_index, pair) in line.windows(2).enumerate() {
        let point = plane.closest_point(pair[0], pair[1])?;
        let distance = distance_m(query, point);

        // Ties keep the earliest segment.
        if best.is_none_or(|current| distance < current.distance_m - TIE_TOLERANCE_M) {
            best = Some(NearestPoint {
                point,
                segment_index,
                distance_m: distance,
            });
        }
    }

    best.ok_or(GeometryError::EmptyPolyline(line.len()))
}

/// Degrees relative to an origin, with longitude scaled by `cos(lat)` so
/// both axes have the same length per degree near the origin.
///
/// Longitude differences are wrapped into `[-180, 180)`, so a segment
/// crossing the antimeridian stays short.
struct LocalPlane {
    origin: Point,
    lng_scale: f64,
}

impl LocalPlane {
    fn centred_on(origin: Point) -> Self {
        Self {
            origin,
            lng_scale: origin.lat().to_radians().cos(),
        }
    }

    /// The point of segment `a -> b` closest to the origin.
    fn closest_point(&self, a: Point, b: Point) -> Result<Point, InvalidPoint> {
        let d_lng = wrap_degrees(b.lng() - a.lng());
        let d_lat = b.lat() - a.lat();

        let start = Coord {
            x: wrap_degrees(a.lng() - self.origin.lng()) * self.lng_scale,
            y: a.lat() - self.origin.lat(),
        };
        let end = Coord {
            x: start.x + d_lng * self.lng_scale,
            y: start.y + d_lat,
        };
        let fraction = Line::new(start, end)
            .line_locate_point(&geo::Point::new(0.0, 0.0))
            .unwrap_or(0.0);

        if fraction <= 0.0 {
            return Ok(a);
        }
        if fraction >= 1.0 {
            return Ok(b);
        }

        // The plane is affine in (lng, lat), so the fraction carries over to
        // the segment itself, with `b` unwrapped next to `a`.
        let segment = Line::new(
            Coord { x: a.lng(), y: a.lat() },
            Coord {
                x: a.lng() + d_lng,
                y: b.lat(),
            },
        );
        let p = segment.point_at_ratio_from_start(&Euclidean, fraction);
        Point::try_from(geo::Point::new(
            wrap_degrees(p.x()),
            p.y().clamp(-90.0, 90.0),
        ))
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
fn wrap_degrees(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
