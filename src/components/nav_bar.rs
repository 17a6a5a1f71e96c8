//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Static site navigation
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">"FrameStore"</A>
                <div class="nav-links">
                    <A href="/products">"Товары"</A>
                    <A href="/cart">"Корзина"</A>
                    <A href="/login">"Вход"</A>
                    <A href="/register">"Регистрация"</A>
                </div>
            </div>
        </nav>
    }
}
