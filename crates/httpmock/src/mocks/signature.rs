//! Request signature used as the registry key.

use crate::types::request::Request;
use std::fmt;

/// Identity of a request for responder lookup: the method and URL, both verbatim.
///
/// The key is structured rather than a concatenated string, so `("A", "B1")` and
/// `("AB", "1")` stay distinct. Headers and body never take part in the signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSignature {
    method: String,
    url: String,
}

impl RequestSignature {
    /// Create a signature from a method and URL, kept verbatim
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }

    /// HTTP method part
    pub fn method(&self) -> &str {
        &self.method
    }

    /// URL part
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<&Request> for RequestSignature {
    fn from(request: &Request) -> Self {
        Self::new(request.method.as_str(), request.url.as_str())
    }
}

/// Renders as `METHOD url`. HTTP method tokens never contain spaces, so the first space
/// always separates the two parts.
impl fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_signature_ignores_headers_and_body() {
        let plain = Request::new("GET", "http://example.com/?b=2&a=1");
        let decorated = Request::new("GET", "http://example.com/?b=2&a=1")
            .with_header("Accept", "text/plain")
            .with_body("ignored");

        assert_eq!(
            RequestSignature::from(&plain),
            RequestSignature::from(&decorated)
        );
    }

    #[rstest]
    #[case(("A", "B1"), ("AB", "1"))]
    #[case(("GET", "http://a.com/"), ("GET", "http://a.com"))]
    #[case(("GET", "http://a.com/"), ("get", "http://a.com/"))]
    #[case(("GET", "http://a.com/?a=1&b=2"), ("GET", "http://a.com/?b=2&a=1"))]
    #[case(("GET", "http://a.com/"), ("GET", "https://a.com/"))]
    fn test_signatures_differ(#[case] left: (&str, &str), #[case] right: (&str, &str)) {
        assert_ne!(
            RequestSignature::new(left.0, left.1),
            RequestSignature::new(right.0, right.1)
        );
    }

    #[rstest]
    fn test_signature_display() {
        let signature = RequestSignature::new("GET", "http://example.com/");
        assert_eq!(signature.to_string(), "GET http://example.com/");
        assert_eq!(signature.method(), "GET");
        assert_eq!(signature.url(), "http://example.com/");
    }
}
