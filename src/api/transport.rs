//! HTTP Transport
//!
//! `reqwest`-backed [`Transport`]. On wasm32 this runs on the browser's `fetch`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{ApiRequest, Method, RawResponse, Transport};
use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.config.endpoint(request.path);
        log::debug!("{:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url).header(CONTENT_TYPE, "application/json"),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            log::error!("{} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} -> {}", request.path, status);

        Ok(RawResponse { status, body })
    }
}
