//! Login Form Component
//!
//! Submits credentials and shows the server's reply as a notice.

use leptos::prelude::*;

use crate::api::{self, LOGIN_FAILED};
use crate::context::use_app_context;
use crate::drafts::LoginDraft;
use crate::notices::NoticeKind;
use crate::resource::ManagedResource;
use crate::store::{store_notify, use_ui_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let request = ManagedResource::<()>::new();
    let draft = RwSignal::new(LoginDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let LoginDraft { email, password } = draft.get();
        request.submit(
            ctx,
            LOGIN_FAILED,
            move |t| async move { api::login(&t, &email, &password).await },
            move |outcome| match outcome {
                Ok(text) => store_notify(&store, NoticeKind::Info, text),
                Err(message) => store_notify(&store, NoticeKind::Error, message),
            },
        );
    };

    view! {
        <div class="auth-form">
            <h2>"Вход"</h2>
            <form on:submit=on_submit>
                <label>"Email:"</label>
                <input
                    type="email"
                    required
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
                <label>"Пароль:"</label>
                <input
                    type="password"
                    required
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || request.is_busy()>"Войти"</button>
            </form>
        </div>
    }
}
