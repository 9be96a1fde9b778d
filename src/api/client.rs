use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use super::types::{Food, OrderPayload, is_favorite_record};

/// Errors that can occur while talking to the food API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS setup). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API answered with a non-success status.
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The remote operations the food detail screen depends on.
#[async_trait]
pub trait FoodApi: Send + Sync {
    /// Fetches one food record with its extras.
    async fn fetch_food(&self, food_id: u64) -> Result<Food, ApiError>;

    /// Returns whether a favorite record exists for the food.
    async fn fetch_favorite(&self, food_id: u64) -> Result<bool, ApiError>;

    async fn add_favorite(&self, food: &Food) -> Result<(), ApiError>;

    async fn remove_favorite(&self, food_id: u64) -> Result<(), ApiError>;

    async fn place_order(&self, order: &OrderPayload) -> Result<(), ApiError>;
}

/// `FoodApi` backed by a JSON REST server.
pub struct HttpFoodApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFoodApi {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Turns a non-success response into `ApiError::Api`, keeping the body as message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let err_body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("Food API error: {} - {}", status, err_body);
    Err(ApiError::Api {
        status,
        message: err_body,
    })
}

#[async_trait]
impl FoodApi for HttpFoodApi {
    async fn fetch_food(&self, food_id: u64) -> Result<Food, ApiError> {
        let url = self.url(&format!("foods/{food_id}"));
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let food: Food = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!("Loaded food {} with {} extras", food.id, food.extras.len());
        Ok(food)
    }

    async fn fetch_favorite(&self, food_id: u64) -> Result<bool, ApiError> {
        let url = self.url(&format!("favorites/{food_id}"));
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Absence is reported as 404 by json-server style backends
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Favorite {} not found", food_id);
            return Ok(false);
        }
        let response = check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(is_favorite_record(&body))
    }

    async fn add_favorite(&self, food: &Food) -> Result<(), ApiError> {
        let url = self.url("favorites");
        info!("POST {} (food_id={})", url, food.id);

        let response = self
            .client
            .post(&url)
            .json(food)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }

    async fn remove_favorite(&self, food_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("favorites/{food_id}"));
        info!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }

    async fn place_order(&self, order: &OrderPayload) -> Result<(), ApiError> {
        let url = self.url("orders");
        info!(
            "POST {} (product_id={}, extras={}, price={})",
            url,
            order.product_id,
            order.extras.len(),
            order.price
        );

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}
