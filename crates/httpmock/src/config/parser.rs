//! Fixture file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fixture file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Yaml,
    Json,
    /// JSON with `//` and `/* */` comments
    Jsonc,
}

impl FixtureFormat {
    /// Format for `path`, or `None` when the extension is not recognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("jsonc") {
            Some(Self::Jsonc)
        } else {
            None
        }
    }

    /// Deserialize `content` written in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Jsonc => Ok(serde_json::from_str(&strip_json_comments(content))?),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str,
    StrEscape,
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments from JSONC content, leaving string literals intact.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut state = Scan::Code;

    while let Some(c) = chars.next() {
        state = match (state, c) {
            (Scan::Code, '/') if chars.peek() == Some(&'/') => {
                chars.next();
                Scan::LineComment
            }
            (Scan::Code, '/') if chars.peek() == Some(&'*') => {
                chars.next();
                Scan::BlockComment
            }
            (Scan::Code, '"') => {
                result.push(c);
                Scan::Str
            }
            (Scan::Code, _) => {
                result.push(c);
                Scan::Code
            }
            (Scan::Str, '\\') => {
                result.push(c);
                Scan::StrEscape
            }
            (Scan::Str, '"') => {
                result.push(c);
                Scan::Code
            }
            (Scan::Str, _) | (Scan::StrEscape, _) => {
                result.push(c);
                Scan::Str
            }
            (Scan::LineComment, '\n' | '\r') => {
                result.push(c);
                Scan::Code
            }
            (Scan::LineComment, _) => Scan::LineComment,
            (Scan::BlockComment, '*') if chars.peek() == Some(&'/') => {
                chars.next();
                Scan::Code
            }
            (Scan::BlockComment, _) => Scan::BlockComment,
        };
    }

    result
}

/// Parse the content of the fixture file at `path`, picking the format from its extension.
pub fn parse_fixture_file<T: DeserializeOwned>(
    content: &str,
    path: &Path,
) -> Result<T, ConfigError> {
    let format = FixtureFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnknownFileType(path.display().to_string()))?;
    format.parse(content)
}
