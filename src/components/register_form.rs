//! Register Form Component

use leptos::prelude::*;

use crate::api::{self, REGISTER_FAILED};
use crate::context::use_app_context;
use crate::drafts::RegisterDraft;
use crate::notices::NoticeKind;
use crate::resource::ManagedResource;
use crate::store::{store_notify, use_ui_store};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let request = ManagedResource::<()>::new();
    let draft = RwSignal::new(RegisterDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let RegisterDraft { email, password, confirm } = draft.get();
        request.submit(
            ctx,
            REGISTER_FAILED,
            move |t| async move { api::register(&t, &email, &password, &confirm).await },
            move |outcome| match outcome {
                Ok(text) => store_notify(&store, NoticeKind::Info, text),
                Err(message) => store_notify(&store, NoticeKind::Error, message),
            },
        );
    };

    view! {
        <div class="auth-form">
            <h2>"Регистрация"</h2>
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
                <label>"Подтверждение пароля:"</label>
                <input
                    type="password"
                    required
                    prop:value=move || draft.with(|d| d.confirm.clone())
                    on:input=move |ev| draft.update(|d| d.confirm = event_target_value(&ev))
                />
                <button type="submit" disabled=move || request.is_busy()>"Зарегистрироваться"</button>
            </form>
        </div>
    }
}
