//! PokeAPI client with response memoization
//!
//! The client performs GETs against the catalog service and stores each
//! response body verbatim in the [`Cache`], keyed by request URL, so a cache
//! hit decodes byte-identically to a live fetch. The cache itself never
//! touches the network; this client is the only place misses are filled.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cache::Cache;

use super::{LocationArea, LocationPage, Pokemon};

/// First page of the location-area listing, 20 entries per page
pub const LOCATION_AREAS_URL: &str = "https://pokeapi.co/api/v2/location-area?offset=0&limit=20";

/// Base URL for looking up a single location area by name
pub const LOCATION_AREA_BASE_URL: &str = "https://pokeapi.co/api/v2/location-area/";

/// Base URL for looking up a single creature by name
pub const POKEMON_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Errors that can occur when fetching catalog data
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream returned a non-success status
    #[error("error fetching {url}: {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// Fresh response body did not match the expected shape
    #[error("failed to parse response from {url}: {source}")]
    ParseError {
        url: String,
        source: serde_json::Error,
    },

    /// A cached payload no longer decodes; the entry has been evicted
    #[error("failed to parse cached data for {url}: {source}")]
    CorruptCacheEntry {
        url: String,
        source: serde_json::Error,
    },
}

/// Client for fetching catalog data, backed by the response cache
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    cache: Cache,
}

impl ApiClient {
    /// Creates a client with a default HTTP client and the given cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            http: Client::new(),
            cache,
        }
    }

    /// Creates a client with a custom HTTP client, e.g. one with timeouts.
    #[allow(dead_code)]
    pub fn with_client(http: Client, cache: Cache) -> Self {
        Self { http, cache }
    }

    /// Fetches `url` and decodes the body as `T`, consulting the cache first.
    ///
    /// On a miss the raw body bytes are stored before decoding, so the next
    /// request for the same URL is served from memory. A cached payload that
    /// fails to decode is evicted and reported, rather than being served
    /// again on the next call.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        if let Some(bytes) = self.cache.get(url) {
            return match serde_json::from_slice(&bytes) {
                Ok(value) => Ok(value),
                Err(source) => {
                    self.cache.delete(url);
                    Err(ApiError::CorruptCacheEntry {
                        url: url.to_string(),
                        source,
                    })
                }
            };
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        self.cache.set(url, bytes.to_vec());

        serde_json::from_slice(&bytes).map_err(|source| ApiError::ParseError {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches one page of the location-area listing.
    pub async fn list_location_areas(&self, url: &str) -> Result<LocationPage, ApiError> {
        self.fetch_json(url).await
    }

    /// Fetches a single location area by name.
    pub async fn explore_area(&self, area: &str) -> Result<LocationArea, ApiError> {
        let url = format!("{}{}", LOCATION_AREA_BASE_URL, area);
        self.fetch_json(&url).await
    }

    /// Fetches a single creature by name.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}{}", POKEMON_BASE_URL, name);
        self.fetch_json(&url).await
    }
}
