pub mod error;
pub mod types;

pub use error::{ExtractorError, Result};
pub use types::{ExtractionInput, PostExtraction};

use async_trait::async_trait;

/// The remote worker seam. The dispatcher only sees this trait, so it can
/// be driven by a mock in tests.
#[async_trait]
pub trait TagExtractor: Send + Sync {
    /// Extract hashtags and creators for every url in one batch.
    ///
    /// Contract: the returned vec has exactly one entry per url, in the
    /// order the urls were given.
    async fn extract_batch(&self, urls: &[String]) -> Result<Vec<PostExtraction>>;
}

pub struct ExtractorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ExtractorClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TagExtractor for ExtractorClient {
    async fn extract_batch(&self, urls: &[String]) -> Result<Vec<PostExtraction>> {
        let input = ExtractionInput {
            urls: urls.to_vec(),
        };

        tracing::debug!(count = urls.len(), "Sending batch to extraction worker");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let posts: Vec<PostExtraction> = resp.json().await?;

        // The aggregator needs per-post attribution, so a flat per-batch
        // response (fewer entries than urls) is rejected, not guessed at.
        if posts.len() != urls.len() {
            return Err(ExtractorError::Shape {
                expected: urls.len(),
                got: posts.len(),
            });
        }

        tracing::debug!(count = posts.len(), "Batch extraction complete");
        Ok(posts)
    }
}
