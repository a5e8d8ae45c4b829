use crate::analysis::ProductRecord;
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Where fitting records come from, abstracted so the analyzer can be
/// exercised against in-memory fixtures.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self, product_id: &str) -> Result<ProductRecord, FetchError>;
}

/// Failure modes for the outbound product lookup. The analyzer collapses all
/// of them into one unavailable outcome; the variants exist so logs can say
/// which leg failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("product '{product_id}' not found")]
    NotFound { product_id: String },
    #[error("product API returned status {status}")]
    Status { status: u16 },
    #[error("malformed product payload: {0}")]
    Payload(String),
    #[error("failed to reach product API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the product API.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self, product_id: &str) -> Result<ProductRecord, FetchError> {
        let url = format!("{}/api/products/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                product_id: product_id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        response.json::<ProductRecord>().await.map_err(|err| {
            if err.is_decode() {
                FetchError::Payload(err.to_string())
            } else {
                FetchError::Transport(err)
            }
        })
    }
}
