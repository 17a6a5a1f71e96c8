//! Checkout Endpoint

use serde::Serialize;

use super::response::{classify, Access};
use super::{ApiRequest, Transport};
use crate::error::ApiError;

pub const CHECKOUT_FAILED: &str = "Не удалось оформить заказ";

#[derive(Serialize)]
struct CheckoutArgs<'a> {
    email: &'a str,
    name: &'a str,
}

/// `POST /api/checkout`. Protected; the success body may be empty.
pub async fn checkout(transport: &dyn Transport, email: &str, name: &str) -> Result<String, ApiError> {
    let request = ApiRequest::post_json("/api/checkout", &CheckoutArgs { email, name })?;
    let response = transport.send(request).await?;
    classify(response, Access::Protected)
}
