use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::config::{FetchConfig, TableEncoding};
use crate::error::{FetchError, FetchResult};

/// Row projection sent with every request.
pub const SELECT_ALL: &str = "select=*";

/// Build the PostgREST URL for reading every row of `table`.
///
/// Plain concatenation: the table name is not escaped.
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}?{}", base_url, table, SELECT_ALL)
}

/// Build the PostgREST URL with `table` percent-encoded as one path segment.
pub fn encoded_table_url(base_url: &str, table: &str) -> FetchResult<String> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| FetchError::invalid_config(format!("'{}' cannot be a base URL", base_url)))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);
    url.set_query(Some(SELECT_ALL));
    Ok(url.to_string())
}

/// A fully built, not yet sent, table read.
#[derive(Debug, Clone)]
pub struct TableRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
}

impl TableRequest {
    /// Build the GET request described by `config`.
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        let url = match config.table_encoding {
            TableEncoding::Verbatim => table_url(&config.supabase_url, &config.table),
            TableEncoding::Percent => encoded_table_url(&config.supabase_url, &config.table)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| FetchError::invalid_config(format!("Invalid API key header: {}", e)))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|e| FetchError::invalid_config(format!("Invalid auth header: {}", e)))?,
        );
        // Inert on a bodyless GET; sent for parity with other Supabase clients.
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            method: Method::GET,
            url,
            headers,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.supabase.co";

    #[test]
    fn table_url_is_plain_concatenation() {
        let cases = [
            (BASE, "cities"),
            ("http://127.0.0.1:54321", "countries"),
            ("https://example.supabase.co/", "t"),
            ("x", "y"),
        ];
        for (base, table) in cases {
            assert_eq!(
                table_url(base, table),
                base.to_string() + "/rest/v1/" + table + "?select=*"
            );
        }
    }

    #[test]
    fn table_url_keeps_space_unescaped() {
        assert_eq!(
            table_url(BASE, "api test"),
            "https://example.supabase.co/rest/v1/api test?select=*"
        );
    }

    #[test]
    fn encoded_table_url_escapes_segment() {
        assert_eq!(
            encoded_table_url(BASE, "api test").unwrap(),
            "https://example.supabase.co/rest/v1/api%20test?select=*"
        );
    }

    #[test]
    fn encoded_table_url_escapes_reserved_characters() {
        let url = encoded_table_url(BASE, "a/b?c#d").unwrap();
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/a%2Fb%3Fc%23d?select=*"
        );
    }

    #[test]
    fn encoded_table_url_rejects_unparseable_base() {
        assert!(matches!(
            encoded_table_url("not a url", "t"),
            Err(FetchError::UrlParse(_))
        ));
    }

    #[test]
    fn request_is_get() {
        let req = TableRequest::new(&FetchConfig::new(BASE, "k", "cities")).unwrap();
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn request_carries_credential_headers() {
        let req = TableRequest::new(&FetchConfig::new(BASE, "anon-key", "cities")).unwrap();
        let headers = req.headers();
        assert_eq!(headers.get("apikey").unwrap(), "anon-key");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon-key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn request_url_follows_encoding() {
        let config = FetchConfig::new(BASE, "k", "api test");
        let verbatim = TableRequest::new(&config).unwrap();
        assert_eq!(verbatim.url(), "https://example.supabase.co/rest/v1/api test?select=*");

        let percent = TableRequest::new(&config.table_encoding(TableEncoding::Percent)).unwrap();
        assert_eq!(percent.url(), "https://example.supabase.co/rest/v1/api%20test?select=*");
    }

    #[test]
    fn request_rejects_key_with_newline() {
        let err = TableRequest::new(&FetchConfig::new(BASE, "bad\nkey", "t")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfig(_)));
    }
}
