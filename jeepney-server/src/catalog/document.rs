//! On-disk route collection format.
//!
//! ```json
//! { "routes": [ { "name": "R1", "color": "#e6194b",
//!                 "coordinates": [[8.50, 124.63], [8.49, 124.64]] } ] }
//! ```
//!
//! The older `jeepneyRoutes` top-level key and per-route `path` key are
//! accepted as aliases. Fields are loosely typed here so that validation
//! can report exactly which entry and coordinate is wrong.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A route collection document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteDocument {
    #[serde(alias = "jeepneyRoutes")]
    pub routes: Vec<RouteEntry>,
}

/// One unvalidated route entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,

    #[serde(default, alias = "path", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
}

impl RouteDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_routes_key() {
        let doc = RouteDocument::from_json(
            r##"{"routes": [{"name": "R1", "color": "#f00", "coordinates": [[8.5, 124.63]]}]}"##,
        )
        .unwrap();

        assert_eq!(doc.routes.len(), 1);
        assert_eq!(doc.routes[0].name, Some(Value::from("R1")));
        assert_eq!(doc.routes[0].color, Some(Value::from("#f00")));
        assert!(doc.routes[0].coordinates.as_ref().is_some_and(Value::is_array));
    }

    #[test]
    fn accepts_legacy_keys() {
        let doc = RouteDocument::from_json(
            r#"{"jeepneyRoutes": [{"name": "R1", "color": "red", "path": [[8.5, 124.63], [8.49, 124.64]]}]}"#,
        )
        .unwrap();

        assert_eq!(doc.routes.len(), 1);
        let path = doc.routes[0].coordinates.as_ref().and_then(Value::as_array);
        assert_eq!(path.map(Vec::len), Some(2));
    }

    #[test]
    fn missing_fields_are_none() {
        let doc = RouteDocument::from_json(r#"{"routes": [{}]}"#).unwrap();
        let entry = &doc.routes[0];
        assert!(entry.name.is_none());
        assert!(entry.color.is_none());
        assert!(entry.coordinates.is_none());
    }

    #[test]
    fn wrongly_typed_fields_still_parse() {
        let doc = RouteDocument::from_json(
            r#"{"routes": [{"name": 42, "color": null, "coordinates": "8.5,124.6"}]}"#,
        )
        .unwrap();

        let entry = &doc.routes[0];
        assert_eq!(entry.name, Some(Value::from(42)));
        assert!(entry.color.is_none());
        assert_eq!(entry.coordinates, Some(Value::from("8.5,124.6")));
    }

    #[test]
    fn rejects_missing_routes_key() {
        assert!(RouteDocument::from_json(r#"{"lines": []}"#).is_err());
        assert!(RouteDocument::from_json("not json").is_err());
    }
}
