//! Application Shell - корневая страница заказа
//!
//! Содержит hero-блок, карточку rodízio, каталог и панель корзины.

use crate::domain::a002_product::ui::list::ProductGrid;
use crate::domain::a003_cart::ui::sidebar::CartSidebar;
use crate::domain::a004_rodizio::ui::banner::RodizioBanner;
use crate::layout::hero::Hero;
use crate::layout::use_order;
use leptos::logging::log;
use leptos::prelude::*;

/// Класс `<body>`, блокирующий прокрутку при открытой корзине
const BODY_LOCK_CLASS: &str = "scroll-locked";

#[component]
pub fn AppShell() -> impl IntoView {
    let order = use_order();

    Effect::new(move |_| {
        let open = order.cart_open.get();
        log!("🛒 cart panel open: {}", open);
        set_body_scroll_lock(open);
    });

    view! {
        <main class="app">
            <Hero />
            <RodizioBanner />
            <ProductGrid />
            <CartSidebar />
        </main>
    }
}

fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(err) = body.class_list().toggle_with_force(BODY_LOCK_CLASS, locked) {
        log::warn!("Failed to toggle '{}' on body: {:?}", BODY_LOCK_CLASS, err);
    }
}
