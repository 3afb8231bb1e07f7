//! Static responders declared in fixture files.

use crate::config::error::ConfigError;
use crate::config::parser::parse_fixture_file;
use crate::error::{Error, Result};
use crate::mocks::registry::{Responder, ResponderRegistry};
use crate::types::request::Request;
use crate::types::response::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tracing::debug;

fn default_status() -> u16 {
    200
}

/// Canned answer for one `(method, url)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    /// HTTP method, matched verbatim
    pub method: String,
    /// Full request URL, matched verbatim
    pub url: String,
    /// HTTP status code of the response
    #[serde(default = "default_status")]
    pub status: u16,
    /// Response headers
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Response body. Strings are sent as is, any other JSON value is serialized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// When set, the responder fails with this message instead of responding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Fixture {
    /// Build the response this fixture describes.
    pub fn response(&self) -> Response {
        let mut response = Response::new(self.status);
        response.headers = self.headers.clone();

        match &self.body {
            None => {}
            Some(Value::String(text)) => response.body = text.clone().into(),
            Some(value) => {
                response.body = value.to_string().into();
                response
                    .headers
                    .entry("Content-Type".to_string())
                    .or_insert_with(|| "application/json".to_string());
            }
        }

        response
    }
}

/// Responder answering from a [`Fixture`].
#[derive(Debug, Clone)]
pub struct FixtureResponder {
    fixture: Fixture,
}

impl FixtureResponder {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }
}

impl Responder for FixtureResponder {
    fn respond(&self, _request: &Request) -> Result<Response> {
        match &self.fixture.error {
            Some(message) => Err(Error::responder(message.as_str())),
            None => Ok(self.fixture.response()),
        }
    }
}

/// Load fixtures from every file matching `pattern`, a path or glob pattern.
///
/// Each file holds a list of fixtures. Files are read in path order, so when two fixtures
/// share a signature the later one wins once registered.
pub fn load_fixtures(pattern: &str) -> Result<Vec<Fixture>, ConfigError> {
    let mut fixtures = Vec::new();
    let mut matched = false;

    for entry in glob::glob(pattern)? {
        let path = entry?;
        matched = true;
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let mut parsed: Vec<Fixture> = parse_fixture_file(&content, &path)?;
        debug!("Loaded {} fixtures from {}", parsed.len(), path.display());
        fixtures.append(&mut parsed);
    }

    if !matched {
        return Err(ConfigError::NoFilesMatched(pattern.to_string()));
    }

    Ok(fixtures)
}

/// Register every fixture in `registry`. Returns the number of fixtures registered.
pub fn register_fixtures(registry: &ResponderRegistry, fixtures: Vec<Fixture>) -> usize {
    let count = fixtures.len();
    for fixture in fixtures {
        let method = fixture.method.clone();
        let url = fixture.url.clone();
        registry.register_arc(&method, &url, Arc::new(FixtureResponder::new(fixture)));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::path::Path;
    use tempfile::TempDir;

    fn fixture(method: &str, url: &str) -> Fixture {
        Fixture {
            method: method.to_string(),
            url: url.to_string(),
            status: 200,
            headers: HashMap::new(),
            body: None,
            error: None,
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("Should write fixture file");
    }

    #[rstest]
    fn test_fixture_defaults() {
        let parsed: Fixture =
            serde_json::from_str(r#"{"method": "GET", "url": "http://example.com/"}"#)
                .expect("Should deserialize");
        assert_eq!(parsed, fixture("GET", "http://example.com/"));
    }

    #[rstest]
    fn test_fixture_string_body_is_verbatim() {
        let mut fixture = fixture("GET", "/");
        fixture.body = Some(Value::from("xin chao"));
        let response = fixture.response();
        assert_eq!(response.text(), "xin chao");
        assert_eq!(response.content_length(), 8);
        assert!(!response.headers.contains_key("Content-Type"));
    }

    #[rstest]
    fn test_fixture_json_body_is_serialized() {
        let mut fixture = fixture("GET", "/");
        fixture.status = 201;
        fixture.body = Some(json!({"id": 1}));
        let response = fixture.response();
        assert_eq!(response.status, 201);
        assert_eq!(response.json::<Value>().expect("Should parse"), json!({"id": 1}));
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[rstest]
    fn test_fixture_keeps_explicit_content_type() {
        let mut fixture = fixture("GET", "/");
        fixture
            .headers
            .insert("Content-Type".to_string(), "application/hal+json".to_string());
        fixture.body = Some(json!([1, 2]));
        let response = fixture.response();
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"application/hal+json".to_string())
        );
    }

    #[rstest]
    fn test_fixture_responder_error() {
        let mut fixture = fixture("GET", "/");
        fixture.error = Some("connection reset".to_string());
        let error = FixtureResponder::new(fixture)
            .respond(&Request::new("GET", "/"))
            .expect_err("Should fail");
        assert_eq!(error.to_string(), "connection reset");
    }

    #[rstest]
    fn test_register_fixtures() {
        let registry = ResponderRegistry::new();
        let mut first = fixture("GET", "http://example.com/");
        first.body = Some(Value::from("first"));
        let mut second = fixture("GET", "http://example.com/");
        second.body = Some(Value::from("second"));

        let count = register_fixtures(
            &registry,
            vec![first, second, fixture("DELETE", "http://example.com/")],
        );

        assert_eq!(count, 3);
        assert_eq!(registry.len(), 2);
        let response = registry
            .resolve("GET", "http://example.com/")
            .expect("Should resolve")
            .respond(&Request::new("GET", "http://example.com/"))
            .expect("Should respond");
        assert_eq!(response.text(), "second");
    }

    #[rstest]
    fn test_load_fixtures_from_glob() {
        let dir = TempDir::new().expect("Should create temp dir");
        write(
            dir.path(),
            "a.yaml",
            "- method: GET\n  url: http://example.com/\n  body: xin chao\n",
        );
        write(
            dir.path(),
            "b.yaml",
            "- method: POST\n  url: http://example.com/users\n  status: 201\n",
        );
        write(dir.path(), "notes.txt", "ignored");

        let fixtures = load_fixtures(&format!("{}/*.yaml", dir.path().display()))
            .expect("Should load");

        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].url, "http://example.com/");
        assert_eq!(fixtures[0].body, Some(Value::from("xin chao")));
        assert_eq!(fixtures[1].method, "POST");
        assert_eq!(fixtures[1].status, 201);
    }

    #[rstest]
    fn test_load_fixtures_single_path() {
        let dir = TempDir::new().expect("Should create temp dir");
        write(
            dir.path(),
            "fixtures.jsonc",
            "[\n  // greeting\n  {\"method\": \"GET\", \"url\": \"/\", \"error\": \"what\"}\n]",
        );

        let fixtures = load_fixtures(&dir.path().join("fixtures.jsonc").to_string_lossy())
            .expect("Should load");
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].error.as_deref(), Some("what"));
    }

    #[rstest]
    fn test_load_fixtures_no_match() {
        let dir = TempDir::new().expect("Should create temp dir");
        let result = load_fixtures(&format!("{}/*.yaml", dir.path().display()));
        assert!(matches!(result, Err(ConfigError::NoFilesMatched(_))));
    }

    #[rstest]
    fn test_load_fixtures_unknown_file_type() {
        let dir = TempDir::new().expect("Should create temp dir");
        write(dir.path(), "fixtures.txt", "[]");
        let result = load_fixtures(&format!("{}/*.txt", dir.path().display()));
        assert!(matches!(result, Err(ConfigError::UnknownFileType(_))));
    }

    #[rstest]
    fn test_load_fixtures_invalid_pattern() {
        let result = load_fixtures("fixtures/[");
        assert!(matches!(result, Err(ConfigError::Pattern(_))));
    }
}
