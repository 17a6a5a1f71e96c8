//! Product Listing Component
//!
//! Loads the catalog on mount; each card can add its product to the cart.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CART_ADD_FAILED, PRODUCTS_LOAD_FAILED};
use crate::components::{ErrorCard, LoadingCard};
use crate::context::{use_app_context, AppContext};
use crate::models::Product;
use crate::notices::NoticeKind;
use crate::remote_state::{PendingActions, RemoteState};
use crate::resource::ManagedResource;
use crate::store::{store_notify, use_ui_store, UiStore};

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let products = ManagedResource::<Vec<Product>>::new();
    let pending = RwSignal::new(PendingActions::<u64>::default());

    let load = move || products.load(ctx, PRODUCTS_LOAD_FAILED, |t| async move { api::list_products(&t).await });

    // Load on mount
    Effect::new(move |_| load());

    let add_to_cart = Callback::new(move |product_id: u64| {
        add_product(ctx, store, pending, product_id);
    });

    view! {
        <div>
            <h2 class="page-title">"Фреймворки программирования"</h2>
            {move || products.with(|state| match state {
                RemoteState::Loading => view! { <LoadingCard text="Загрузка товаров..." /> }.into_any(),
                RemoteState::Failed(message) => view! {
                    <ErrorCard message=message.clone() on_retry=move |_| load() />
                }.into_any(),
                RemoteState::Ready(list) if list.is_empty() => view! {
                    <div class="product-grid">
                        <div class="card">"Товары отсутствуют"</div>
                    </div>
                }.into_any(),
                RemoteState::Ready(list) => {
                    let list = list.clone();
                    view! {
                        <div class="product-grid">
                            {list.into_iter().map(|product| view! {
                                <ProductCard product=product pending=pending on_add=add_to_cart />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
                RemoteState::Idle | RemoteState::Submitting | RemoteState::Succeeded => {
                    view! { <div></div> }.into_any()
                }
            })}
        </div>
    }
}

/// Add one product; other products stay clickable while this is in flight
fn add_product(ctx: AppContext, store: UiStore, pending: RwSignal<PendingActions<u64>>, product_id: u64) {
    pending.update(|p| p.begin(product_id));
    spawn_local(async move {
        let result = api::add_to_cart(&ctx.transport(), product_id).await;
        let settled = ctx.settle(result, CART_ADD_FAILED);
        let _ = pending.try_update(|p| p.finish(&product_id));
        match settled {
            Some(Ok(text)) => store_notify(&store, NoticeKind::Info, text),
            Some(Err(message)) => store_notify(&store, NoticeKind::Error, format!("Ошибка: {}", message)),
            None => {}
        }
    });
}

#[component]
fn ProductCard(
    product: Product,
    pending: RwSignal<PendingActions<u64>>,
    on_add: Callback<u64>,
) -> impl IntoView {
    let id = product.id;
    let is_adding = move || pending.with(|p| p.contains(&id));

    view! {
        <div class="card product-card">
            <img class="product-image" src=product.image_url.clone().unwrap_or_default() alt=product.name.clone() />
            <h3>{product.name.clone()}</h3>
            <p class="product-description">{product.description.clone().unwrap_or_default()}</p>
            <div class="product-footer">
                <p class="product-price">{product.price.display().to_string()} " ₽"</p>
                <button
                    disabled=is_adding
                    class=move || if is_adding() { "add-btn busy" } else { "add-btn" }
                    on:click=move |_| on_add.run(id)
                >
                    {move || if is_adding() { "Добавляем..." } else { "В корзину" }}
                </button>
            </div>
        </div>
    }
}
