//! The validated, immutable route collection.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{Point, Route};

use super::document::{RouteDocument, RouteEntry};
use super::error::CatalogError;

/// An ordered, read-only collection of routes.
///
/// Catalog order is the order routes appeared in the source document, and
/// it decides which match wins when several routes qualify. Route names
/// are unique.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Arc<Route>>,
    loaded_at: DateTime<Utc>,
}

impl RouteCatalog {
    /// Build a catalog from already-validated routes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidRouteData` if two routes share a name.
    pub fn new(routes: Vec<Route>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            for (index, route) in routes.iter().enumerate() {
                if !seen.insert(route.name()) {
                    return Err(CatalogError::InvalidRouteData {
                        index,
                        reason: format!("duplicate route name {:?}", route.name()),
                    });
                }
            }
        }

        Ok(Self {
            routes: routes.into_iter().map(Arc::new).collect(),
            loaded_at: Utc::now(),
        })
    }

    /// A catalog with no routes. Every plan against it is `NotFound`.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Parse and validate a JSON route document.
    ///
    /// # Examples
    ///
    /// ```
    /// use jeepney_server::catalog::RouteCatalog;
    ///
    /// let catalog = RouteCatalog::from_json(
    ///     r#"{"routes": [{"name": "R1", "color": "blue",
    ///                     "coordinates": [[8.50, 124.63], [8.49, 124.64]]}]}"#,
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// // Missing coordinates fail the whole load.
    /// assert!(RouteCatalog::from_json(r#"{"routes": [{"name": "R1", "color": "blue"}]}"#).is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let doc = RouteDocument::from_json(text).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })?;
        Self::from_document(doc)
    }

    /// Validate every entry of a document. Fails on the first bad entry.
    pub fn from_document(doc: RouteDocument) -> Result<Self, CatalogError> {
        let routes = doc
            .routes
            .into_iter()
            .enumerate()
            .map(|(index, entry)| route_from_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(routes)
    }

    /// Routes in catalog order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Route>> {
        self.routes.iter().find(|r| r.name() == name)
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the catalog holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// When this catalog was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Validate a single document entry into a `Route`.
fn route_from_entry(index: usize, entry: RouteEntry) -> Result<Route, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRouteData {
        index,
        reason: reason.to_string(),
    };

    let name = match entry.name {
        Some(Value::String(name)) => name,
        Some(_) => return Err(invalid("name must be a string")),
        None => return Err(invalid("missing name")),
    };
    let color = match entry.color {
        Some(Value::String(color)) => color,
        Some(_) => return Err(invalid("color must be a string")),
        None => return Err(invalid("missing color")),
    };
    let raw = match entry.coordinates {
        Some(Value::Array(raw)) => raw,
        Some(_) => return Err(invalid("coordinates must be an array")),
        None => return Err(invalid("missing coordinates")),
    };
    if raw.len() < 2 {
        return Err(invalid("at least 2 coordinates are required"));
    }

    let coordinates = raw
        .iter()
        .enumerate()
        .map(|(i, value)| {
            parse_coordinate(value).map_err(|reason| CatalogError::MalformedCoordinate {
                route: name.clone(),
                index: i,
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Route::new(name, color, coordinates).map_err(|e| CatalogError::InvalidRouteData {
        index,
        reason: e.to_string(),
    })
}

/// Parse a `[lat, lng]` JSON pair.
fn parse_coordinate(value: &Value) -> Result<Point, String> {
    let pair = match value.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(format!("expected [lat, lng], got {value}")),
    };

    let (Some(lat), Some(lng)) = (pair[0].as_f64(), pair[1].as_f64()) else {
        return Err(format!("expected numbers, got {value}"));
    };

    Point::new(lat, lng).map_err(|e| e.reason().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROUTES: &str = r##"{
        "routes": [
            {"name": "R1", "color": "#e6194b", "coordinates": [[8.50, 124.63], [8.49, 124.64]]},
            {"name": "R2", "color": "#3cb44b", "coordinates": [[8.49, 124.64], [8.47, 124.65]]}
        ]
    }"##;

    #[test]
    fn loads_in_document_order() {
        let catalog = RouteCatalog::from_json(TWO_ROUTES).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.routes()[0].name(), "R1");
        assert_eq!(catalog.routes()[1].name(), "R2");
        assert_eq!(catalog.routes()[1].color(), "#3cb44b");
        assert_eq!(
            catalog.routes()[0].coordinates()[1],
            Point::new(8.49, 124.64).unwrap()
        );
    }

    #[test]
    fn get_by_name() {
        let catalog = RouteCatalog::from_json(TWO_ROUTES).unwrap();
        assert_eq!(catalog.get("R2").map(|r| r.name()), Some("R2"));
        assert!(catalog.get("R3").is_none());
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        let catalog = RouteCatalog::from_json(r#"{"routes": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert!(RouteCatalog::empty().is_empty());
    }

    #[test]
    fn missing_coordinates_fails_whole_load() {
        let text = r#"{"routes": [
            {"name": "R1", "color": "red", "coordinates": [[8.50, 124.63], [8.49, 124.64]]},
            {"name": "R2", "color": "blue"}
        ]}"#;

        let err = RouteCatalog::from_json(text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidRouteData { index: 1, ref reason } if reason == "missing coordinates"
        ));
    }

    #[test]
    fn missing_name_or_color() {
        let err = RouteCatalog::from_json(
            r#"{"routes": [{"color": "red", "coordinates": [[0, 0], [0, 1]]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRouteData { index: 0, .. }));

        let err = RouteCatalog::from_json(
            r#"{"routes": [{"name": "R1", "coordinates": [[0, 0], [0, 1]]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRouteData { index: 0, .. }));
    }

    #[test]
    fn wrongly_typed_fields_are_invalid_route_data() {
        let cases = [
            (r#"{"name": 42, "color": "red", "coordinates": [[0, 0], [0, 1]]}"#, "name must be a string"),
            (r#"{"name": "R1", "color": ["red"], "coordinates": [[0, 0], [0, 1]]}"#, "color must be a string"),
            (r#"{"name": "R1", "color": "red", "coordinates": "8.5,124.6"}"#, "coordinates must be an array"),
            (r#"{"name": "R1", "color": "red", "path": {"lat": 8.5}}"#, "coordinates must be an array"),
        ];

        for (entry, expected) in cases {
            let text = format!(r#"{{"routes": [{entry}]}}"#);
            let err = RouteCatalog::from_json(&text).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidRouteData { index: 0, ref reason } if reason == expected),
                "{entry}: {err:?}"
            );
        }
    }

    #[test]
    fn null_name_is_missing() {
        let err = RouteCatalog::from_json(
            r#"{"routes": [{"name": null, "color": "red", "coordinates": [[0, 0], [0, 1]]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidRouteData { index: 0, ref reason } if reason == "missing name"
        ));
    }

    #[test]
    fn blank_name_is_invalid() {
        let err = RouteCatalog::from_json(
            r#"{"routes": [{"name": "  ", "color": "red", "coordinates": [[0, 0], [0, 1]]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRouteData { index: 0, .. }));
    }

    #[test]
    fn single_coordinate_is_invalid() {
        let err = RouteCatalog::from_json(
            r#"{"routes": [{"name": "R1", "color": "red", "coordinates": [[8.5, 124.6]]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRouteData { index: 0, .. }));
    }

    #[test]
    fn malformed_coordinates() {
        let cases = [
            r#"[[8.5, 124.6], [8.5]]"#,
            r#"[[8.5, 124.6], [8.5, 124.6, 3.0]]"#,
            r#"[[8.5, 124.6], ["8.5", "124.6"]]"#,
            r#"[[8.5, 124.6], {"lat": 8.5, "lng": 124.6}]"#,
            r#"[[8.5, 124.6], [95.0, 124.6]]"#,
            r#"[[8.5, 124.6], [8.5, 200.0]]"#,
        ];

        for coords in cases {
            let text = format!(
                r#"{{"routes": [{{"name": "R1", "color": "red", "coordinates": {coords}}}]}}"#
            );
            let err = RouteCatalog::from_json(&text).unwrap_err();
            assert!(
                matches!(err, CatalogError::MalformedCoordinate { ref route, index: 1, .. } if route == "R1"),
                "{coords}: {err:?}"
            );
        }
    }

    #[test]
    fn duplicate_names_rejected() {
        let text = r#"{"routes": [
            {"name": "R1", "color": "red", "coordinates": [[0, 0], [0, 1]]},
            {"name": "R1", "color": "blue", "coordinates": [[1, 0], [1, 1]]}
        ]}"#;

        let err = RouteCatalog::from_json(text).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRouteData { index: 1, .. }));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            RouteCatalog::from_json("{").unwrap_err(),
            CatalogError::Json { .. }
        ));
    }

    #[test]
    fn integer_coordinates_accepted() {
        let catalog = RouteCatalog::from_json(
            r#"{"routes": [{"name": "R1", "color": "red", "coordinates": [[8, 124], [9, 125]]}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.routes()[0].coordinates()[0], Point::new(8.0, 124.0).unwrap());
    }
}
