use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{FetchError, FetchResult};

/// How the table name is embedded into the request path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableEncoding {
    /// Concatenate the table name as-is. Spaces and reserved characters are not escaped.
    #[default]
    Verbatim,
    /// Percent-encode the table name as a single path segment.
    Percent,
}

impl fmt::Display for TableEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbatim => write!(f, "verbatim"),
            Self::Percent => write!(f, "percent"),
        }
    }
}

impl FromStr for TableEncoding {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" | "raw" => Ok(Self::Verbatim),
            "percent" | "encoded" => Ok(Self::Percent),
            other => Err(FetchError::invalid_config(format!(
                "unknown table encoding '{}' (expected 'verbatim' or 'percent')",
                other
            ))),
        }
    }
}

/// Endpoint and credentials for a single table read.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Supabase project URL (e.g. "https://your-project.supabase.co")
    pub supabase_url: String,
    /// Supabase anon or service_role key
    pub api_key: String,
    /// Table exposed under `/rest/v1/`
    pub table: String,
    pub table_encoding: TableEncoding,
    /// Treat a status of 400 or above as an error instead of returning its body.
    pub fail_on_status: bool,
}

impl FetchConfig {
    /// Create a new config for reading `table` from the project at `supabase_url`.
    pub fn new(
        supabase_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            api_key: api_key.into(),
            table: table.into(),
            table_encoding: TableEncoding::default(),
            fail_on_status: false,
        }
    }

    /// Set how the table name is embedded into the URL.
    pub fn table_encoding(mut self, encoding: TableEncoding) -> Self {
        self.table_encoding = encoding;
        self
    }

    /// Return [`FetchError::Status`] for error statuses rather than the body.
    pub fn fail_on_status(mut self, fail: bool) -> Self {
        self.fail_on_status = fail;
        self
    }

    /// Check that every field is present and the project URL is an http(s) URL.
    ///
    /// The table name itself is not inspected.
    pub fn validate(&self) -> FetchResult<()> {
        if self.supabase_url.trim().is_empty() {
            return Err(FetchError::invalid_config("supabase_url is required"));
        }
        if self.api_key.is_empty() {
            return Err(FetchError::invalid_config("api_key is required"));
        }
        if self.table.is_empty() {
            return Err(FetchError::invalid_config("table is required"));
        }

        let url = Url::parse(&self.supabase_url).map_err(|e| {
            FetchError::invalid_config(format!(
                "invalid supabase_url '{}': {}",
                self.supabase_url, e
            ))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FetchError::invalid_config(format!(
                "unsupported URL scheme '{}' (expected http or https)",
                scheme
            ))),
        }
    }
}

impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchConfig")
            .field("supabase_url", &self.supabase_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .field("table_encoding", &self.table_encoding)
            .field("fail_on_status", &self.fail_on_status)
            .finish()
    }
}
