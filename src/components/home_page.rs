//! Home Page Component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const FEATURES: &[(&str, &str)] = &[
    ("Большой выбор", "Мы предлагаем фотографии самых популярных фреймворков для различных языков программирования"),
    ("Мгновенная доставка", "После оформления заказа фотографии сразу отправляются на ваш email"),
    ("Высокое качество", "Все фотографии выполнены в отличном качестве и отображают сущность каждого фреймворка"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let to_login = navigate.clone();

    view! {
        <div class="home">
            <div class="home-hero">
                <h1>"FrameStore"</h1>
                <p>
                    "Добро пожаловать в наш магазин фреймворков для программирования! "
                    "Мы предлагаем уникальные фотографии популярных фреймворков, "
                    "которые будут отправлены на ваш email после покупки."
                </p>
                <div class="home-actions">
                    <button on:click=move |_| navigate("/products", Default::default())>
                        "Смотреть фреймворки"
                    </button>
                    <button class="secondary" on:click=move |_| to_login("/login", Default::default())>
                        "Войти в аккаунт"
                    </button>
                </div>
            </div>

            <div class="feature-grid">
                {FEATURES.iter().map(|(title, text)| view! {
                    <div class="card">
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
