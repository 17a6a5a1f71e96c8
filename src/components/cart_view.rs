//! Cart View Component
//!
//! Loads the cart on mount, lists rows and the aggregate total.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{self, CART_LOAD_FAILED};
use crate::components::{ErrorCard, LoadingCard};
use crate::context::use_app_context;
use crate::models::CartItem;
use crate::remote_state::RemoteState;
use crate::resource::ManagedResource;
use crate::totals::{cart_total, format_total};

#[component]
pub fn CartView() -> impl IntoView {
    let ctx = use_app_context();
    let cart = ManagedResource::<Vec<CartItem>>::new();

    let load = move || cart.load(ctx, CART_LOAD_FAILED, |t| async move { api::get_cart(&t).await });

    // Load on mount
    Effect::new(move |_| load());

    view! {
        {move || cart.with(|state| match state {
            RemoteState::Loading => view! { <LoadingCard text="Загрузка корзины..." /> }.into_any(),
            RemoteState::Failed(message) => view! {
                <ErrorCard message=message.clone() on_retry=move |_| load() />
            }.into_any(),
            RemoteState::Ready(items) => view! { <CartContents items=items.clone() /> }.into_any(),
            RemoteState::Idle | RemoteState::Submitting | RemoteState::Succeeded => {
                view! { <div></div> }.into_any()
            }
        })}
    }
}

#[component]
fn CartContents(items: Vec<CartItem>) -> impl IntoView {
    let navigate = use_navigate();

    if items.is_empty() {
        return view! {
            <div>
                <h2 class="page-title">"Корзина"</h2>
                <div class="card empty-cart">
                    <p>"Ваша корзина пуста"</p>
                    <button on:click=move |_| navigate("/products", Default::default())>
                        "Перейти к товарам"
                    </button>
                </div>
            </div>
        }
        .into_any();
    }

    let total = format_total(cart_total(&items));

    view! {
        <div>
            <h2 class="page-title">"Корзина"</h2>
            <div>
                {items.into_iter().map(|item| view! { <CartRow item=item /> }).collect_view()}
            </div>
            <div class="card cart-summary">
                <div>
                    <p class="cart-total-label">"Итого:"</p>
                    <p class="cart-total">{total} " ₽"</p>
                </div>
                <button on:click=move |_| navigate("/checkout", Default::default())>"Оформить заказ"</button>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let price = item.price.display().to_string();
    let image = item.image_url.unwrap_or_default();
    let alt = item.name.clone();

    view! {
        <div class="card cart-row">
            <img class="cart-image" src=image alt=alt />
            <div class="cart-row-body">
                <h3>{item.name}</h3>
                <p class="cart-row-description">{item.description.unwrap_or_default()}</p>
            </div>
            <div class="cart-row-price">{price} " ₽"</div>
        </div>
    }
}
