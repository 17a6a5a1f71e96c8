//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::notices::{NoticeKind, NoticeQueue};

/// How long a notice stays up unless dismissed
const NOTICE_TTL_MS: u32 = 4_000;

/// Shell-wide state shared by all views
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Notices shown over the current view
    pub notices: NoticeQueue,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice and schedule its removal
pub fn store_notify(store: &UiStore, kind: NoticeKind, text: impl Into<String>) {
    let id = store.notices().write().push(kind, text);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        // The shell may be gone by now
        let _ = store.notices().try_update(|queue| queue.dismiss(id));
    });
}

/// Remove a notice before it expires
pub fn store_dismiss_notice(store: &UiStore, id: u64) {
    store.notices().write().dismiss(id);
}
