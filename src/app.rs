//! FrameStore Frontend App
//!
//! Router shell: navigation bar, notices and one view per route.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;
use reactive_stores::Store;

use crate::api::response::LOGIN_PATH;
use crate::components::{CartView, CheckoutForm, HomePage, LoginForm, NavBar, NoticeStack, ProductList, RegisterForm};
use crate::config::ApiConfig;
use crate::context::{use_app_context, AppContext};
use crate::store::UiState;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let login_redirect = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(config, login_redirect));
    provide_context(Store::new(UiState::default()));

    view! {
        <Router>
            <LoginRedirect />
            <NavBar />
            <NoticeStack />
            <main class="main-content">
                <Routes fallback=|| view! { <div class="card">"Страница не найдена"</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/cart") view=CartView />
                    <Route path=path!("/checkout") view=CheckoutForm />
                    <Route path=path!("/login") view=LoginForm />
                    <Route path=path!("/register") view=RegisterForm />
                </Routes>
            </main>
        </Router>
    }
}

/// Performs the navigation whenever a protected call reports 401
#[component]
fn LoginRedirect() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if ctx.login_redirect.get() > 0 {
            log::info!("authentication required, redirecting to {}", LOGIN_PATH);
            navigate(LOGIN_PATH, Default::default());
        }
    });
}
