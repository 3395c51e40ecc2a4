//! Typed endpoints over the warehouse REST API.

use serde::de::DeserializeOwned;

use stockroom_core::{ProductId, WarehousemanId};
use stockroom_domain::{NewProduct, Product, Warehouseman};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the warehouse API.
///
/// Cheap to clone; the inner `reqwest::Client` holds the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Build a client from `STOCKROOM_API_URL`.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products`
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get_json(&format!("{}/products", self.base_url)).await
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: ProductId) -> ApiResult<Product> {
        self.get_json(&format!("{}/products/{id}", self.base_url))
            .await
    }

    /// `PUT /products/{id}` — full-object replace, no patching.
    pub async fn put_product(&self, product: &Product) -> ApiResult<Product> {
        let url = format!("{}/products/{}", self.base_url, product.id);
        tracing::debug!(product_id = %product.id, "replacing product");
        let resp = self.http.put(&url).json(product).send().await?;
        Self::decode(Self::check(resp).await?).await
    }

    /// `POST /products` — the server assigns the id.
    pub async fn post_product(&self, draft: &NewProduct) -> ApiResult<Product> {
        let url = format!("{}/products", self.base_url);
        tracing::debug!(name = %draft.name, "creating product");
        let resp = self.http.post(&url).json(draft).send().await?;
        Self::decode(Self::check(resp).await?).await
    }

    /// `GET /warehousemans/{id}`
    pub async fn get_warehouseman(&self, id: WarehousemanId) -> ApiResult<Warehouseman> {
        self.get_json(&format!("{}/warehousemans/{id}", self.base_url))
            .await
    }

    /// `GET /warehousemans?secretKey=` — all records matching a secret key.
    pub async fn find_warehousemen_by_secret(&self, secret_key: &str) -> ApiResult<Vec<Warehouseman>> {
        let url = format!("{}/warehousemans", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("secretKey", secret_key)])
            .send()
            .await?;
        Self::decode(Self::check(resp).await?).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let resp = self.http.get(url).send().await?;
        Self::decode(Self::check(resp).await?).await
    }

    /// Map non-success statuses to errors; 404 gets its own variant.
    async fn check(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "API request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
