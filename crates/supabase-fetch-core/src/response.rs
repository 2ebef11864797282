use std::collections::HashMap;

/// Response from a table read. The body is kept as received.
#[derive(Debug, Clone)]
pub struct TableResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl TableResponse {
    pub(crate) fn new(status: u16, headers: HashMap<String, String>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// All response headers (keys are lowercased).
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a specific response header (case-insensitive lookup).
    pub fn header(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.headers.get(&lower).map(|s| s.as_str())
    }

    /// Get the Content-Type header value.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// The raw response body.
    ///
    /// Decoded as UTF-8; invalid byte sequences are replaced with U+FFFD.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the response and return the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> TableResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("content-range".to_string(), "0-0/*".to_string());
        TableResponse::new(200, headers, r#"[{"id":1}]"#.to_string())
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response();
        assert_eq!(resp.header("Content-Range"), Some("0-0/*"));
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn body_is_untouched() {
        let resp = response();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.body(), r#"[{"id":1}]"#);
        assert_eq!(resp.into_body(), r#"[{"id":1}]"#);
    }
}
