//! Cart Endpoints
//!
//! Both calls are protected: a 401 means the user has to log in.

use serde::Serialize;

use super::response::{classify, decode_json, Access};
use super::{ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::CartItem;

pub const CART_LOAD_FAILED: &str = "Не удалось загрузить корзину";
pub const CART_ADD_FAILED: &str = "Не удалось добавить товар в корзину";

#[derive(Serialize)]
struct AddToCartArgs {
    product_id: u64,
}

/// `GET /api/cart`
pub async fn get_cart(transport: &dyn Transport) -> Result<Vec<CartItem>, ApiError> {
    let response = transport.send(ApiRequest::get("/api/cart")).await?;
    let body = classify(response, Access::Protected)?;
    decode_json(&body)
}

/// `POST /api/cart/add`, returning the server's message text unmodified
pub async fn add_to_cart(transport: &dyn Transport, product_id: u64) -> Result<String, ApiError> {
    let request = ApiRequest::post_json("/api/cart/add", &AddToCartArgs { product_id })?;
    let response = transport.send(request).await?;
    classify(response, Access::Protected)
}
