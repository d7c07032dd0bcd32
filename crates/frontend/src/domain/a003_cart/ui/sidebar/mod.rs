pub mod line;

use self::line::CartLineRow;
use crate::layout::use_order;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::usecases::u501_checkout::view::CheckoutButton;
use contracts::projections::p900_cart_summary::CartSection;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Панель корзины: кнопка с количеством и выезжающий список заказа
#[component]
#[allow(non_snake_case)]
pub fn CartSidebar() -> impl IntoView {
    let order = use_order();
    let currency = order.currency();

    let summary = Memo::new(move |_| order.summary());
    let item_count = move || summary.with(|s| s.totals.item_count);
    let is_empty = move || summary.with(|s| s.is_empty());
    let total = move || summary.with(|s| format_money(s.totals.total_price, &currency));

    let panel_class = move || {
        if order.cart_open.get() {
            "cart-panel cart-panel--open"
        } else {
            "cart-panel"
        }
    };

    view! {
        <button class="cart-trigger" aria-label="Abrir carrinho" on:click=move |_| order.toggle_cart()>
            {icon("cart")}
            <Show when=move || { item_count() > 0 }>
                <span class="cart-trigger__count">
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                        {item_count}
                    </Badge>
                </span>
            </Show>
        </button>

        <div
            class=move || if order.cart_open.get() { "cart-overlay cart-overlay--visible" } else { "cart-overlay" }
            on:click=move |_| order.cart_open.set(false)
        ></div>

        <aside class=panel_class aria-hidden=move || (!order.cart_open.get()).to_string()>
            <header class="cart-panel__header">
                <h2 class="cart-panel__title">
                    {icon("cart")}
                    "Seu Pedido"
                </h2>
                {move || order.countdown().map(|time| view! {
                    <div class="cart-panel__countdown">
                        {icon("clock")}
                        <span>{time}</span>
                    </div>
                })}
                <button class="cart-panel__close" aria-label="Fechar" on:click=move |_| order.cart_open.set(false)>
                    {icon("x")}
                </button>
            </header>

            <div class="cart-panel__content">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <div class="cart-panel__empty">
                            {icon("cart")}
                            <p>"Seu carrinho está vazio"</p>
                        </div>
                    }
                >
                    {move || summary.with(|s| s.sections()).into_iter().map(render_section).collect_view()}
                </Show>
            </div>

            <Show when=move || !is_empty()>
                <footer class="cart-panel__footer">
                    <div class="cart-panel__total">
                        <span>"Total:"</span>
                        <span class="cart-panel__total-value">{total.clone()}</span>
                    </div>
                    <CheckoutButton />
                </footer>
            </Show>
        </aside>
    }
}

fn render_section(section: CartSection) -> impl IntoView {
    let title = section.kind.title();
    view! {
        <div class="cart-section">
            {title.map(|t| view! { <h3 class="cart-section__title">{t}</h3> })}
            <div class="cart-section__lines">
                {section
                    .lines
                    .into_iter()
                    .map(|line| view! { <CartLineRow line=line /> })
                    .collect_view()}
            </div>
        </div>
    }
}
