//! One-shot Supabase table reads over PostgREST.
//!
//! Builds `GET {supabase_url}/rest/v1/{table}?select=*` with the `apikey` and
//! `Authorization: Bearer` headers, sends it once, and hands back the raw body.
//!
//! # Usage
//!
//! ```ignore
//! use supabase_fetch_core::{FetchConfig, TableClient};
//!
//! let client = TableClient::new(FetchConfig::new(url, key, "cities"))?;
//! let body = client.fetch().await?.into_body();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use client::TableClient;
pub use config::{FetchConfig, TableEncoding};
pub use error::{FetchError, FetchResult, PostgrestErrorResponse};
pub use request::{encoded_table_url, table_url, TableRequest, SELECT_ALL};
pub use response::TableResponse;
