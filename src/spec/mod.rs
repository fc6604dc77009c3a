//! Spec file model and loading.
//!
//! A spec file holds a `default` spec whose headers apply to every URL, and
//! the list of per-URL specs that override them.

mod loader;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

pub use loader::load_spec_file;

/// Header name to ordered values, as written in a spec file.
///
/// A `null` value list is kept so merging can skip it. The map is ordered by
/// header name, which fixes the order in which headers are checked.
pub type Headers = BTreeMap<String, Option<Vec<String>>>;

/// Header name to ordered values, after merging.
pub type MergedHeaders = BTreeMap<String, Vec<String>>;

/// Reads `null` as the empty value, the way files written by Go tooling
/// encode nil maps and slices.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Expected request and response headers for one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spec {
    /// Target URL (ignored on the default spec)
    #[serde(alias = "Url", alias = "URL", deserialize_with = "null_as_default")]
    pub url: String,
    /// Headers sent with the request
    #[serde(alias = "RequestHeaders", deserialize_with = "null_as_default")]
    pub request_headers: Headers,
    /// Headers the response must carry
    #[serde(alias = "ResponseHeaders", deserialize_with = "null_as_default")]
    pub response_headers: Headers,
}

/// Parsed contents of one spec file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpecContainer {
    /// Headers shared by every spec
    #[serde(alias = "Default", deserialize_with = "null_as_default")]
    pub default: Spec,
    /// Per-URL specs, checked in order
    #[serde(alias = "Specs", deserialize_with = "null_as_default")]
    pub specs: Vec<Spec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "default": {
                "requestHeaders": {"Accept": ["text/html"]},
                "responseHeaders": {"X-Frame-Options": ["SAMEORIGIN"]}
            },
            "specs": [
                {"url": "https://example.com/", "responseHeaders": {"Set-Cookie": [""]}}
            ]
        }"#;
        let container: SpecContainer = serde_json::from_str(json).unwrap();

        assert_eq!(
            container.default.request_headers.get("Accept"),
            Some(&Some(vec!["text/html".to_string()]))
        );
        assert_eq!(container.specs.len(), 1);
        assert_eq!(container.specs[0].url, "https://example.com/");
        assert!(container.specs[0].request_headers.is_empty());
        assert_eq!(
            container.specs[0].response_headers.get("Set-Cookie"),
            Some(&Some(vec![String::new()]))
        );
    }

    #[test]
    fn test_deserialize_pascal_case_and_nulls() {
        let json = r#"{
            "Default": {"ResponseHeaders": {"Cache-Control": ["no-store"]}},
            "Specs": [
                {"Url": "http://localhost/", "ResponseHeaders": {"Cache-Control": null}}
            ]
        }"#;
        let container: SpecContainer = serde_json::from_str(json).unwrap();

        assert_eq!(container.specs[0].url, "http://localhost/");
        assert_eq!(
            container.specs[0].response_headers.get("Cache-Control"),
            Some(&None)
        );
    }

    #[test]
    fn test_deserialize_go_marshalled_nil_maps() {
        let json = concat!(
            r#"{"Default":{"Url":"","RequestHeaders":null,"#,
            r#""ResponseHeaders":{"X-Frame-Options":["SAMEORIGIN"]}},"#,
            r#""Specs":[{"Url":"http://localhost/","#,
            r#""RequestHeaders":null,"ResponseHeaders":null}]}"#,
        );
        let container: SpecContainer = serde_json::from_str(json).unwrap();

        assert!(container.default.request_headers.is_empty());
        assert_eq!(container.default.response_headers.len(), 1);
        assert_eq!(container.specs.len(), 1);
        assert_eq!(container.specs[0].url, "http://localhost/");
        assert!(container.specs[0].request_headers.is_empty());
        assert!(container.specs[0].response_headers.is_empty());
    }

    #[test]
    fn test_deserialize_null_default_specs_and_url() {
        let container: SpecContainer =
            serde_json::from_str(r#"{"default": null, "specs": null}"#).unwrap();
        assert_eq!(container, SpecContainer::default());

        let container: SpecContainer =
            serde_json::from_str(r#"{"specs": [{"url": null}]}"#).unwrap();
        assert_eq!(container.specs, vec![Spec::default()]);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let container: SpecContainer = serde_json::from_str("{}").unwrap();
        assert_eq!(container, SpecContainer::default());
    }
}
