//! Login and Registration Endpoints
//!
//! Both are public: whatever text the server answers with is shown to the
//! user as-is, including the text of a 401.

use serde::Serialize;

use super::response::{classify, Access};
use super::{ApiRequest, Transport};
use crate::error::ApiError;

pub const LOGIN_FAILED: &str = "Не удалось войти";
pub const REGISTER_FAILED: &str = "Не удалось зарегистрироваться";

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    email: &'a str,
    password: &'a str,
    confirm: &'a str,
}

/// `POST /api/login`
pub async fn login(transport: &dyn Transport, email: &str, password: &str) -> Result<String, ApiError> {
    let request = ApiRequest::post_json("/api/login", &LoginArgs { email, password })?;
    let response = transport.send(request).await?;
    classify(response, Access::Public)
}

/// `POST /api/register`. Password confirmation is checked by the server.
pub async fn register(
    transport: &dyn Transport,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<String, ApiError> {
    let request = ApiRequest::post_json("/api/register", &RegisterArgs { email, password, confirm })?;
    let response = transport.send(request).await?;
    classify(response, Access::Public)
}
