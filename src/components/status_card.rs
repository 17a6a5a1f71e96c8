//! Status Cards
//!
//! Loading and failure placeholders shared by the data views.

use leptos::prelude::*;

/// Shown while a view's first request is in flight
#[component]
pub fn LoadingCard(#[prop(into)] text: String) -> impl IntoView {
    view! { <div class="card">{text}</div> }
}

/// Inline failure with a retry button that re-issues the same request
#[component]
pub fn ErrorCard(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card error-card">
            <span class="error-text">"Ошибка: " {message}</span>
            <button type="button" class="retry-btn" on:click=move |_| on_retry.run(())>
                "Повторить"
            </button>
        </div>
    }
}
