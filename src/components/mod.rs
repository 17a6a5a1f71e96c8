//! UI Components
//!
//! Leptos views, one per route plus shared chrome.

mod cart_view;
mod checkout_form;
mod home_page;
mod login_form;
mod nav_bar;
mod notice_stack;
mod product_list;
mod register_form;
mod status_card;

pub use cart_view::CartView;
pub use checkout_form::CheckoutForm;
pub use home_page::HomePage;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use notice_stack::NoticeStack;
pub use product_list::ProductList;
pub use register_form::RegisterForm;
pub use status_card::{ErrorCard, LoadingCard};
