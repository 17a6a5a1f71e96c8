//! Product Endpoints

use super::response::{classify, decode_json, Access};
use super::{ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::Product;

pub const PRODUCTS_LOAD_FAILED: &str = "Не удалось загрузить товары";

/// `GET /api/products`. Public: a 401 here is an ordinary failure.
pub async fn list_products(transport: &dyn Transport) -> Result<Vec<Product>, ApiError> {
    let response = transport.send(ApiRequest::get("/api/products")).await?;
    let body = classify(response, Access::Public)?;
    decode_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubTransport;
    use crate::api::Method;

    #[tokio::test]
    async fn test_list_products_issues_one_get() {
        let stub = StubTransport::replying(200, r#"[{"id":1,"name":"Rocket","price":300}]"#);
        let products = list_products(&stub).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Rocket");
        let request = stub.only_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/api/products");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let stub = StubTransport::replying(200, "[]");
        assert_eq!(list_products(&stub).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_401_is_a_plain_failure() {
        let stub = StubTransport::replying(401, "");
        assert_eq!(
            list_products(&stub).await,
            Err(ApiError::Status { status: 401, message: None })
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let stub = StubTransport::replying(200, "<html>");
        assert!(matches!(list_products(&stub).await, Err(ApiError::Decode(_))));
    }
}
