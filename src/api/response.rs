//! Response Policy
//!
//! The single place where HTTP status codes are interpreted. Every endpoint
//! wrapper classifies its raw response here, and every view settles the
//! result with [`settle`], which is where the redirect-on-401 rule lives.

use serde::de::DeserializeOwned;

use super::RawResponse;
use crate::error::ApiError;

/// Route users are sent to when a protected call answers 401
pub const LOGIN_PATH: &str = "/login";

/// Whether a 401 from the endpoint means "log in first".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// 401 redirects to the login view
    Protected,
    /// 401 is an ordinary failure (the login call itself, registration)
    Public,
}

/// Turn a raw response into its body text or an [`ApiError`].
pub fn classify(response: RawResponse, access: Access) -> Result<String, ApiError> {
    match response.status {
        200..=299 => Ok(response.body),
        401 if access == Access::Protected => Err(ApiError::Unauthenticated),
        status => {
            let has_text = !response.body.trim().is_empty();
            Err(ApiError::Status {
                status,
                message: has_text.then_some(response.body),
            })
        }
    }
}

/// Parse a successful body as JSON.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// What a view should do with a finished call.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    Done(T),
    /// Show this message; the view stays put
    Failed(String),
    /// Stop handling the response and go to [`LOGIN_PATH`]
    RedirectToLogin,
}

/// Apply the shared policy to a call result.
///
/// `default_message` is shown when the failure carries no server text.
pub fn settle<T>(result: Result<T, ApiError>, default_message: &str) -> Settled<T> {
    match result {
        Ok(value) => Settled::Done(value),
        Err(err) => match err.user_message(default_message) {
            Some(message) => Settled::Failed(message),
            None => Settled::RedirectToLogin,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_success_passes_body_through() {
        assert_eq!(classify(raw(200, "Товар добавлен"), Access::Protected), Ok("Товар добавлен".into()));
        assert_eq!(classify(raw(204, ""), Access::Protected), Ok(String::new()));
    }

    #[test]
    fn test_protected_401_is_unauthenticated() {
        assert_eq!(classify(raw(401, "login please"), Access::Protected), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn test_public_401_keeps_server_text() {
        assert_eq!(
            classify(raw(401, "Неверный пароль\n"), Access::Public),
            Err(ApiError::Status { status: 401, message: Some("Неверный пароль\n".into()) })
        );
    }

    #[test]
    fn test_server_text_is_not_reformatted() {
        let result = classify(raw(401, "  Неверный пароль\n"), Access::Public);
        assert_eq!(settle::<String>(result, "d"), Settled::Failed("  Неверный пароль\n".into()));
    }

    #[test]
    fn test_failure_without_body_has_no_message() {
        assert_eq!(
            classify(raw(500, "  \n"), Access::Protected),
            Err(ApiError::Status { status: 500, message: None })
        );
    }

    #[test]
    fn test_settle_redirects_only_on_unauthenticated() {
        assert_eq!(settle::<()>(Err(ApiError::Unauthenticated), "d"), Settled::RedirectToLogin);
        assert_eq!(
            settle::<()>(Err(ApiError::Status { status: 403, message: None }), "Не удалось"),
            Settled::Failed("Не удалось".into())
        );
        assert_eq!(
            settle::<()>(Err(ApiError::Status { status: 409, message: Some("Уже в корзине".into()) }), "d"),
            Settled::Failed("Уже в корзине".into())
        );
        assert_eq!(settle(Ok(3), "d"), Settled::Done(3));
    }

    #[test]
    fn test_decode_json_reports_shape_errors() {
        assert!(matches!(decode_json::<Vec<u32>>("{}"), Err(ApiError::Decode(_))));
        assert_eq!(decode_json::<Vec<u32>>("[1,2]"), Ok(vec![1, 2]));
    }
}
