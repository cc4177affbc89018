//! Token metadata upload to the pump.fun IPFS endpoint.
//!
//! Combines the token's text fields and its image (fetched from the given
//! URL) into one multipart submission. The endpoint pins the image and the
//! metadata JSON and answers with the resulting `metadataUri`.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::env;

use crate::error::{UploadError, UploadResult};
use crate::launch::{LaunchOptions, TokenInfo};

/// Production metadata upload endpoint.
pub const DEFAULT_IPFS_ENDPOINT: &str = "https://pump.fun/api/ipfs";

/// Fixed filename for the uploaded image part.
const IMAGE_FILENAME: &str = "token.png";

/// Client for the token metadata upload endpoint.
pub struct MetadataUploader {
    endpoint: String,
    proxy: Option<String>,
}

impl MetadataUploader {
    /// Create an uploader for the production endpoint, reading the optional
    /// outbound proxy from the `PUMP_PROXY_URL` environment variable.
    pub fn new() -> Self {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        Self {
            endpoint: DEFAULT_IPFS_ENDPOINT.to_string(),
            proxy: env::var("PUMP_PROXY_URL").ok(),
        }
    }

    /// Override the upload endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Override the outbound proxy.
    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    /// Upload the token metadata and image.
    ///
    /// Fetches the image first; if that fails, the endpoint is never
    /// contacted. On success, returns the parsed JSON body as-is; callers
    /// extract `metadata.name`, `metadata.symbol` and `metadataUri` from it.
    pub async fn upload(&self, token: &TokenInfo, options: &LaunchOptions) -> UploadResult<Value> {
        // 1. Fetch the image bytes
        let image = reqwest::get(&token.image_url)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| UploadError::ImageFetch(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| UploadError::ImageFetch(e.to_string()))?;

        // 2. Build the multipart form
        let mut form = Form::new()
            .text("name", token.name.clone())
            .text("symbol", token.ticker.clone())
            .text("description", token.description.clone())
            .text("showName", "true");

        if let Some(twitter) = &options.twitter {
            form = form.text("twitter", twitter.clone());
        }
        if let Some(telegram) = &options.telegram {
            form = form.text("telegram", telegram.clone());
        }
        if let Some(website) = &options.website {
            form = form.text("website", website.clone());
        }

        let file = Part::bytes(image.to_vec())
            .file_name(IMAGE_FILENAME)
            .mime_str("image/png")
            .map_err(|e| UploadError::Http(e.to_string()))?;
        form = form.part("file", file);

        // 3. Send, routing through the proxy when one is configured
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = &self.proxy {
            builder = builder
                .proxy(reqwest::Proxy::all(proxy).map_err(|e| UploadError::Http(e.to_string()))?);
        }
        let client = builder
            .build()
            .map_err(|e| UploadError::Http(e.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected(status.to_string()));
        }

        // 4. Hand the body back as an opaque mapping
        response
            .json::<Value>()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}

impl Default for MetadataUploader {
    fn default() -> Self {
        Self::new()
    }
}
