//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::response::{settle, Settled};
use crate::api::HttpTransport;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    /// Bumped every time a protected call answers 401 - read
    pub login_redirect: ReadSignal<u32>,
    /// Bumped every time a protected call answers 401 - write
    set_login_redirect: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: ApiConfig, login_redirect: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            config: StoredValue::new(config),
            login_redirect: login_redirect.0,
            set_login_redirect: login_redirect.1,
        }
    }

    /// Transport for one backend call
    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(self.config.get_value())
    }

    /// Apply the shared response policy to a finished call.
    ///
    /// Returns `None` when the user is being redirected to the login view;
    /// the caller must then stop handling the response.
    pub fn settle<T>(&self, result: Result<T, ApiError>, default_message: &str) -> Option<Result<T, String>> {
        if let Err(err) = &result {
            log::warn!("backend call failed: {}", err);
        }
        match settle(result, default_message) {
            Settled::Done(value) => Some(Ok(value)),
            Settled::Failed(message) => Some(Err(message)),
            Settled::RedirectToLogin => {
                self.set_login_redirect.update(|n| *n += 1);
                None
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
