//! Backend API Bindings
//!
//! Typed wrappers over the storefront REST endpoints, organized by domain.
//! Every call goes through a [`Transport`] and then through
//! [`response::classify`], so status handling lives in one place.

mod auth;
mod cart;
mod checkout;
mod products;
pub mod response;
mod transport;

use async_trait::async_trait;

use crate::error::ApiError;

pub use auth::*;
pub use cart::*;
pub use checkout::*;
pub use products::*;
pub use transport::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing call. `body` is already-serialized JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: None }
    }

    pub fn post_json<B: serde::Serialize>(path: &'static str, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body)?;
        Ok(Self { method: Method::Post, path, body: Some(body) })
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever came back.
///
/// Implementations must not interpret status codes; that is
/// [`response::classify`]'s job.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}
