//! Transit route type.

use super::{DomainError, Point};

/// One jeepney line's fixed path, start to end.
///
/// # Invariants
///
/// - Name and color are non-empty (after trimming whitespace)
/// - At least two coordinates; consecutive coordinates form the
///   segments of the path, in travel order
///
/// The name is the route's identity within a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    color: String,
    coordinates: Vec<Point>,
}

impl Route {
    /// Constructs a route, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoute` if the name or color is blank
    /// or there are fewer than two coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use jeepney_server::domain::{Point, Route};
    ///
    /// let coords = vec![
    ///     Point::new(8.50, 124.63).unwrap(),
    ///     Point::new(8.49, 124.64).unwrap(),
    /// ];
    /// let route = Route::new("R1", "#ff0000", coords).unwrap();
    /// assert_eq!(route.name(), "R1");
    /// assert_eq!(route.segment_count(), 1);
    ///
    /// assert!(Route::new("R2", "red", vec![Point::new(8.5, 124.6).unwrap()]).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        coordinates: Vec<Point>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        let color = color.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::InvalidRoute("route name must not be empty"));
        }
        if color.is_empty() {
            return Err(DomainError::InvalidRoute("route color must not be empty"));
        }
        if coordinates.len() < 2 {
            return Err(DomainError::InvalidRoute(
                "route must have at least 2 coordinates",
            ));
        }

        Ok(Self {
            name,
            color,
            coordinates,
        })
    }

    /// Route name, e.g. "RD Lapasan".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color (hex or a named color), passed through untouched.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Path coordinates in travel order.
    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    /// Number of segments in the path.
    pub fn segment_count(&self) -> usize {
        self.coordinates.len() - 1
    }
}
