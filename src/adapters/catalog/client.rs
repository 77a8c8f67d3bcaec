//! Catalog API HTTP client
//!
//! Reqwest-backed implementation of [`CatalogApi`] against the catalog
//! service's REST endpoints. Transport and protocol failures are mapped into
//! [`CatalogError`] values here so nothing above this layer sees reqwest
//! types; response bodies of failed requests are preserved verbatim because
//! they become per-product failure reasons.

use super::models::{RemoteProduct, WireProduct};
use super::traits::CatalogApi;
use crate::core::meta::{Meta, META_API_URL_KEY};
use crate::domain::{CatalogError, Channel, ConnectorError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use url::Url;

/// Default request timeout for catalog API calls
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the remote product catalog
///
/// # Example
///
/// ```no_run
/// use skubridge::adapters::catalog::CatalogClient;
/// use skubridge::domain::Channel;
///
/// # fn example() -> skubridge::domain::Result<()> {
/// let channel = Channel::new(1, 21, "demo catalog")
///     .with_meta("api_url", "http://localhost:8080");
/// let client = CatalogClient::for_channel(&channel)?;
/// # Ok(())
/// # }
/// ```
pub struct CatalogClient {
    /// Base URL of the catalog service, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl CatalogClient {
    /// Create a client for an explicit base URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ConnectorError::Configuration(format!("invalid catalog API url {base_url}: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConnectorError::Configuration(format!(
                "invalid catalog API url {base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                ConnectorError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from a channel's `api_url` metadata
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the channel carries no `api_url`
    /// metadata or the value is not a usable URL.
    pub fn for_channel(channel: &Channel) -> Result<Self> {
        let meta = Meta::new(channel);
        let base_url = meta.api_url().ok_or_else(|| {
            ConnectorError::Configuration(format!(
                "channel {} has no {META_API_URL_KEY} metadata",
                channel.id
            ))
        })?;
        Self::new(base_url)
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch products by remote product code
    ///
    /// Returns descriptors in the order of the requested codes.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx response, or an
    /// undecodable body.
    pub async fn get(&self, codes: &[String]) -> std::result::Result<Vec<RemoteProduct>, CatalogError> {
        let url = format!("{}/products", self.base_url);

        tracing::debug!(url = %url, count = codes.len(), "fetching products from catalog API");

        let response = self
            .client
            .get(&url)
            .json(&codes)
            .send()
            .await
            .map_err(connection_error)?;
        let response = check_status(response).await?;

        decode_products(response).await
    }

    /// Fetch one page of the remote catalog
    ///
    /// `offset_code` is the opaque paging cursor returned by the previous
    /// page (absent for the first page); `limit` caps the page size.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx response, or an
    /// undecodable body.
    pub async fn get_page(
        &self,
        offset_code: Option<&str>,
        limit: usize,
    ) -> std::result::Result<Vec<RemoteProduct>, CatalogError> {
        let url = format!("{}/products/page", self.base_url);

        let mut query: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(code) = offset_code {
            query.push(("channel_product_code", code.to_string()));
        }

        tracing::debug!(url = %url, limit = limit, "fetching catalog page");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(connection_error)?;
        let response = check_status(response).await?;

        decode_products(response).await
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn create_or_update(
        &self,
        products: &[WireProduct],
    ) -> std::result::Result<Vec<RemoteProduct>, CatalogError> {
        let url = format!("{}/products", self.base_url);

        tracing::debug!(url = %url, count = products.len(), "posting products to catalog API");

        let response = self
            .client
            .post(&url)
            .json(&products)
            .send()
            .await
            .map_err(connection_error)?;
        let response = check_status(response).await?;

        decode_products(response).await
    }

    async fn delete(&self, codes: &[String]) -> std::result::Result<(), CatalogError> {
        let url = format!("{}/products", self.base_url);

        tracing::debug!(url = %url, count = codes.len(), "deleting products from catalog API");

        let response = self
            .client
            .delete(&url)
            .json(&codes)
            .send()
            .await
            .map_err(connection_error)?;
        check_status(response).await?;

        Ok(())
    }
}

/// Map a reqwest transport error into the domain error type
fn connection_error(err: reqwest::Error) -> CatalogError {
    CatalogError::ConnectionFailed(err.to_string())
}

/// Convert a non-2xx response into an error carrying the raw body
async fn check_status(response: Response) -> std::result::Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The catalog service responds with a JSON-encoded message string;
    // keep it verbatim, it becomes the recorded failure reason.
    let message = response.text().await.unwrap_or_default();
    Err(CatalogError::Api {
        status: status.as_u16(),
        message: message.trim().trim_matches('"').to_string(),
    })
}

/// Decode a product descriptor array from a successful response
async fn decode_products(
    response: Response,
) -> std::result::Result<Vec<RemoteProduct>, CatalogError> {
    response
        .json::<Vec<RemoteProduct>>()
        .await
        .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
}
