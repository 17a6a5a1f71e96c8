//! Notice Stack Component
//!
//! Renders queued notices over the page; click to dismiss.

use leptos::prelude::*;

use crate::notices::NoticeKind;
use crate::store::{store_dismiss_notice, use_ui_store, UiStateStoreFields};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || store.notices().with(|queue| queue.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Info => "notice info",
                        NoticeKind::Error => "notice error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_notice(&store, id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
