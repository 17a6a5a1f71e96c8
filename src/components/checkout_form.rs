//! Checkout Form Component
//!
//! Collects buyer contact details and submits the order. The form and the
//! success panel are never shown together.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{self, Transport, CHECKOUT_FAILED};
use crate::context::{use_app_context, AppContext};
use crate::drafts::CheckoutDraft;
use crate::remote_state::RemoteState;
use crate::resource::ManagedResource;

#[component]
pub fn CheckoutForm() -> impl IntoView {
    let ctx = use_app_context();
    let order = ManagedResource::<()>::new();
    let draft = RwSignal::new(CheckoutDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        place_order(ctx, order, draft, ctx.transport());
    };

    let succeeded = move || order.with(|state| matches!(state, RemoteState::Succeeded));

    view! {
        <div>
            <h2 class="page-title">"Оформление заказа"</h2>
            <Show
                when=succeeded
                fallback=move || view! { <CheckoutFields order=order draft=draft on_submit=on_submit /> }
            >
                <SuccessPanel />
            </Show>
        </div>
    }
}

/// Post the draft as typed; the server judges the contact details.
fn place_order<Tr: Transport + 'static>(
    ctx: AppContext,
    order: ManagedResource<()>,
    draft: RwSignal<CheckoutDraft>,
    transport: Tr,
) {
    let CheckoutDraft { email, name } = draft.get_untracked();
    order.submit_via(
        ctx,
        transport,
        CHECKOUT_FAILED,
        move |t| async move { api::checkout(&t, &email, &name).await },
        move |outcome| {
            if outcome.is_ok() {
                let _ = draft.try_update(CheckoutDraft::clear);
            }
        },
    );
}

#[component]
fn CheckoutFields(
    order: ManagedResource<()>,
    draft: RwSignal<CheckoutDraft>,
    on_submit: impl Fn(web_sys::SubmitEvent) + 'static,
) -> impl IntoView {
    let navigate = use_navigate();
    let submitting = move || order.is_busy();

    view! {
        <div class="card">
            {move || order.with(|state| state.error().map(|message| view! {
                <div class="form-error">{message.to_string()}</div>
            }))}

            <form on:submit=on_submit>
                <div class="form-field">
                    <label for="name">"Ваше имя:"</label>
                    <input
                        type="text"
                        id="name"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="email">"Email для отправки фреймворков:"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                    <p class="form-hint">
                        "На этот адрес будут отправлены приобретенные фреймворки в виде фотографий"
                    </p>
                </div>

                <div class="form-actions">
                    <button type="button" class="secondary" on:click=move |_| navigate("/cart", Default::default())>
                        "Назад в корзину"
                    </button>
                    <button type="submit" disabled=submitting>
                        {move || if submitting() { "Оформляем..." } else { "Оформить заказ" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn SuccessPanel() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="card success-panel">
            <h3>"Заказ успешно оформлен!"</h3>
            <p>"Фреймворки будут отправлены на указанный email."</p>
            <button class="secondary" on:click=move |_| navigate("/products", Default::default())>
                "Вернуться к покупкам"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubTransport;
    use crate::resource::testing::{drain_tasks, run_local, test_context};

    #[tokio::test]
    async fn test_blank_name_is_still_sent() {
        run_local(async {
            let ctx = test_context();
            let order = ManagedResource::<()>::new();
            let draft = RwSignal::new(CheckoutDraft { email: "a@b.c".into(), name: "   ".into() });
            let stub = StubTransport::replying(400, "Укажите имя");

            place_order(ctx, order, draft, stub.clone());
            drain_tasks().await;

            assert_eq!(stub.only_request().body.as_deref(), Some(r#"{"email":"a@b.c","name":"   "}"#));
            assert_eq!(order.snapshot(), RemoteState::Failed("Укажите имя".into()));
            assert_eq!(draft.get_untracked().name, "   ");
        })
        .await;
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        run_local(async {
            let ctx = test_context();
            let order = ManagedResource::<()>::new();
            let draft = RwSignal::new(CheckoutDraft { email: "ann@example.com".into(), name: "Ann".into() });

            place_order(ctx, order, draft, StubTransport::replying(200, ""));
            drain_tasks().await;

            assert_eq!(order.snapshot(), RemoteState::Succeeded);
            assert_eq!(draft.get_untracked(), CheckoutDraft::default());
        })
        .await;
    }
}
