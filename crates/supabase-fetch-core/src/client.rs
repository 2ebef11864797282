use std::collections::HashMap;

use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::request::TableRequest;
use crate::response::TableResponse;

/// HTTP client that reads one Supabase table through PostgREST.
///
/// Sends a single `GET {supabase_url}/rest/v1/{table}?select=*`.
///
/// # Example
/// ```ignore
/// use supabase_fetch_core::{FetchConfig, TableClient};
///
/// let config = FetchConfig::new("https://your-project.supabase.co", "your-anon-key", "cities");
/// let client = TableClient::new(config)?;
/// let response = client.fetch().await?;
/// print!("{}", response.body());
/// ```
#[derive(Debug, Clone)]
pub struct TableClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl TableClient {
    /// Create a new client. Fails if `config` does not validate.
    ///
    /// Redirects are not followed: a 3xx answer is returned as-is, and the
    /// `apikey` header never reaches the redirect target.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(FetchError::Http)?;
        Ok(Self { http, config })
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The caller's redirect policy applies as configured.
    pub fn with_http_client(http: reqwest::Client, config: FetchConfig) -> FetchResult<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Build the request this client would send.
    pub fn request(&self) -> FetchResult<TableRequest> {
        TableRequest::new(&self.config)
    }

    /// Send the request once and return the body.
    ///
    /// Every status is returned with its body unless
    /// [`FetchConfig::fail_on_status`] is set.
    ///
    /// # Errors
    /// * [`FetchError::Http`] on network failure.
    /// * [`FetchError::Status`] if `fail_on_status` is set and the server
    ///   returned a status of 400 or above.
    pub async fn fetch(&self) -> FetchResult<TableResponse> {
        let request = self.request()?;
        debug!(
            method = %request.method(),
            url = %request.url(),
            table = %self.config.table,
            "Fetching table"
        );

        let response = self
            .http
            .request(request.method().clone(), request.url())
            .headers(request.headers().clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_string(), v.to_string());
            }
        }

        let body = response.text().await?;
        debug!(status, bytes = body.len(), "Received table response");

        if status >= 400 && self.config.fail_on_status {
            let err = FetchError::from_status(status, body);
            debug!(status, error = %err, "Table request failed");
            return Err(err);
        }

        Ok(TableResponse::new(status, headers, body))
    }
}
