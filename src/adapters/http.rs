use crate::utils::error::{AssignerError, Result};
use reqwest::Client;

/// File name prefix of images downloaded into the input directory.
pub const TEMP_IMAGE_PREFIX: &str = "temporary_seed_image_";

pub fn temporary_image_name(timestamp: i64) -> String {
    format!("{}{}.jpg", TEMP_IMAGE_PREFIX, timestamp)
}

/// Downloads a placeholder image used as the seed image.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    endpoint: String,
}

impl ImageFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 單一 GET，回應內容視為不透明的圖片位元組
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Requesting seed image from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Image endpoint response status: {}", status);

        if !status.is_success() {
            return Err(AssignerError::ImageFetchError {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Downloaded seed image ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }
}
