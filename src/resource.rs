//! Managed Remote Resource
//!
//! One view's fetch/submit cycle against the backend. Every data view owns
//! one of these; it drives [`RemoteState`] and routes results through
//! [`AppContext::settle`] so the 401 rule is applied the same way everywhere.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTransport;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::remote_state::{RemoteState, TicketCounter};

pub struct ManagedResource<T: Send + Sync + 'static> {
    state: RwSignal<RemoteState<T>>,
    tickets: StoredValue<TicketCounter>,
}

impl<T: Send + Sync + 'static> Clone for ManagedResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ManagedResource<T> {}

impl<T: Send + Sync + 'static> ManagedResource<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RemoteState::Idle),
            tickets: StoredValue::new(TicketCounter::default()),
        }
    }

    /// Read the current state (tracked)
    pub fn with<U>(&self, f: impl FnOnce(&RemoteState<T>) -> U) -> U {
        self.state.with(f)
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(RemoteState::is_busy)
    }

    /// Issue one read and move through `Loading` to `Ready` or `Failed`.
    ///
    /// A newer `load` supersedes this one: late results are dropped, as are
    /// results arriving after the view is gone. Nothing is aborted.
    pub fn load<F, Fut>(&self, ctx: AppContext, default_message: &'static str, fetch: F)
    where
        F: FnOnce(HttpTransport) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        self.load_via(ctx, ctx.transport(), default_message, fetch);
    }

    /// [`load`](Self::load) over an explicit transport.
    pub fn load_via<Tr, F, Fut>(&self, ctx: AppContext, transport: Tr, default_message: &'static str, fetch: F)
    where
        Tr: 'static,
        F: FnOnce(Tr) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Self { state, tickets } = *self;
        let Some(ticket) = tickets.try_update_value(|counter| counter.issue()) else {
            return;
        };
        state.update(RemoteState::begin_load);

        spawn_local(async move {
            let result = fetch(transport).await;
            if !tickets.try_with_value(|counter| counter.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping superseded response");
                return;
            }
            let _ = match ctx.settle(result, default_message) {
                Some(outcome) => state.try_update(|s| s.finish_load(outcome)),
                None => state.try_update(RemoteState::abandon),
            };
        });
    }

    /// Issue one write and move through `Submitting` to `Succeeded` or `Failed`.
    ///
    /// `on_settled` gets the outcome for view-specific follow-up. It is not
    /// called when the user is being redirected to the login view.
    pub fn submit<R, F, Fut>(
        &self,
        ctx: AppContext,
        default_message: &'static str,
        request: F,
        on_settled: impl FnOnce(Result<R, String>) + 'static,
    ) where
        R: 'static,
        F: FnOnce(HttpTransport) -> Fut + 'static,
        Fut: Future<Output = Result<R, ApiError>> + 'static,
    {
        self.submit_via(ctx, ctx.transport(), default_message, request, on_settled);
    }

    /// [`submit`](Self::submit) over an explicit transport.
    pub fn submit_via<Tr, R, F, Fut>(
        &self,
        ctx: AppContext,
        transport: Tr,
        default_message: &'static str,
        request: F,
        on_settled: impl FnOnce(Result<R, String>) + 'static,
    ) where
        Tr: 'static,
        R: 'static,
        F: FnOnce(Tr) -> Fut + 'static,
        Fut: Future<Output = Result<R, ApiError>> + 'static,
    {
        let state = self.state;
        state.update(RemoteState::begin_submit);

        spawn_local(async move {
            let result = request(transport).await;
            match ctx.settle(result, default_message) {
                Some(outcome) => {
                    let summary = outcome.as_ref().map(|_| ()).map_err(Clone::clone);
                    if state.try_update(|s| s.finish_submit(summary)).is_some() {
                        on_settled(outcome);
                    }
                }
                None => {
                    let _ = state.try_update(RemoteState::abandon);
                }
            }
        });
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> RemoteState<T>
    where
        T: Clone,
    {
        self.state.get_untracked()
    }
}

impl<T: Send + Sync + 'static> Default for ManagedResource<T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use tokio::sync::oneshot;

    use super::testing::{drain_tasks, run_local, test_context};
    use super::*;
    use crate::api::testing::StubTransport;
    use crate::api::{self, CART_LOAD_FAILED, CHECKOUT_FAILED, PRODUCTS_LOAD_FAILED};
    use crate::models::{CartItem, Product};

    #[tokio::test]
    async fn test_load_keeps_every_item() {
        run_local(async {
            let ctx = test_context();
            let products = ManagedResource::<Vec<Product>>::new();
            let stub = StubTransport::replying(
                200,
                r#"[{"id":1,"name":"Actix"},{"id":2,"name":"Axum"},{"id":3,"name":"Rocket"}]"#,
            );

            products.load_via(ctx, stub, PRODUCTS_LOAD_FAILED, |t| async move {
                api::list_products(&t).await
            });
            assert_eq!(products.snapshot(), RemoteState::Loading);
            drain_tasks().await;

            let RemoteState::Ready(list) = products.snapshot() else {
                panic!("expected Ready, got {:?}", products.snapshot());
            };
            let ids: Vec<u64> = list.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        })
        .await;
    }

    #[tokio::test]
    async fn test_superseded_load_is_dropped() {
        run_local(async {
            let ctx = test_context();
            let resource = ManagedResource::<Vec<u32>>::new();
            let (release, held) = oneshot::channel::<()>();

            resource.load_via(ctx, (), "d", move |_| async move {
                let _ = held.await;
                Ok(vec![1])
            });
            resource.load_via(ctx, (), "d", |_| async { Ok(vec![2, 3]) });
            drain_tasks().await;
            assert_eq!(resource.snapshot(), RemoteState::Ready(vec![2, 3]));

            release.send(()).unwrap();
            drain_tasks().await;
            assert_eq!(resource.snapshot(), RemoteState::Ready(vec![2, 3]));
        })
        .await;
    }

    #[tokio::test]
    async fn test_load_401_redirects_and_clears_state() {
        run_local(async {
            let ctx = test_context();
            let cart = ManagedResource::<Vec<CartItem>>::new();
            let stub = StubTransport::replying(200, r#"[{"name":"Actix","price":"10"}]"#);
            stub.push(Ok(crate::api::RawResponse { status: 401, body: "login".into() }));

            let first = stub.clone();
            cart.load_via(ctx, first, CART_LOAD_FAILED, |t| async move { api::get_cart(&t).await });
            drain_tasks().await;
            assert!(matches!(cart.snapshot(), RemoteState::Ready(ref items) if items.len() == 1));
            assert_eq!(ctx.login_redirect.get_untracked(), 0);

            cart.load_via(ctx, stub, CART_LOAD_FAILED, |t| async move { api::get_cart(&t).await });
            drain_tasks().await;
            assert_eq!(cart.snapshot(), RemoteState::Idle);
            assert_eq!(ctx.login_redirect.get_untracked(), 1);
        })
        .await;
    }

    #[tokio::test]
    async fn test_load_failure_uses_default_without_server_text() {
        run_local(async {
            let ctx = test_context();
            let cart = ManagedResource::<Vec<CartItem>>::new();
            let stub = StubTransport::replying(500, "");

            cart.load_via(ctx, stub, CART_LOAD_FAILED, |t| async move { api::get_cart(&t).await });
            drain_tasks().await;
            assert_eq!(cart.snapshot(), RemoteState::Failed(CART_LOAD_FAILED.into()));
            assert_eq!(ctx.login_redirect.get_untracked(), 0);
        })
        .await;
    }

    #[tokio::test]
    async fn test_submit_401_skips_follow_up() {
        run_local(async {
            let ctx = test_context();
            let order = ManagedResource::<()>::new();
            let followed_up = Rc::new(Cell::new(false));
            let flag = followed_up.clone();

            order.submit_via(
                ctx,
                StubTransport::replying(401, ""),
                CHECKOUT_FAILED,
                |t| async move { api::checkout(&t, "a@b.c", "Ann").await },
                move |_| flag.set(true),
            );
            assert_eq!(order.snapshot(), RemoteState::Submitting);
            drain_tasks().await;

            assert!(!followed_up.get());
            assert_eq!(order.snapshot(), RemoteState::Idle);
            assert_eq!(ctx.login_redirect.get_untracked(), 1);
        })
        .await;
    }

    #[tokio::test]
    async fn test_submit_failure_reaches_follow_up() {
        run_local(async {
            let ctx = test_context();
            let order = ManagedResource::<()>::new();
            let seen = Rc::new(Cell::new(None));
            let slot = seen.clone();

            order.submit_via(
                ctx,
                StubTransport::replying(400, "Корзина пуста"),
                CHECKOUT_FAILED,
                |t| async move { api::checkout(&t, "a@b.c", "Ann").await },
                move |outcome: Result<String, String>| slot.set(Some(outcome)),
            );
            drain_tasks().await;

            assert_eq!(seen.take(), Some(Err("Корзина пуста".to_string())));
            assert_eq!(order.snapshot(), RemoteState::Failed("Корзина пуста".into()));
            assert_eq!(ctx.login_redirect.get_untracked(), 0);
        })
        .await;
    }
}
