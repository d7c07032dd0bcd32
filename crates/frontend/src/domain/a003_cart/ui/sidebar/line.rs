use crate::layout::use_order;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::a003_cart::CartLine;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Строка корзины с кнопками +/−/удалить
///
/// В отличие от карточки каталога использует `update_quantity`: строка
/// уже существует, создавать новую здесь нельзя.
#[component]
pub fn CartLineRow(line: CartLine) -> impl IntoView {
    let order = use_order();
    let currency = order.currency();

    let product_id = StoredValue::new(line.product_id.clone());
    let quantity = line.quantity as i32;

    let decrement = move |_| product_id.with_value(|id| order.update_quantity(id, quantity - 1));
    let increment = move |_| product_id.with_value(|id| order.update_quantity(id, quantity + 1));
    let remove = move |_| product_id.with_value(|id| order.remove_item(id));

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=line.image.clone() alt=line.name.clone() />
            <div class="cart-line__info">
                <h4 class="cart-line__name">{line.name.clone()}</h4>
                <p class="cart-line__price">{format_money(line.unit_price, &currency)}</p>
            </div>
            <div class="cart-line__controls">
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=decrement>
                    {icon("minus")}
                </Button>
                <span class="cart-line__quantity">{line.quantity}</span>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=increment>
                    {icon("plus")}
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=remove>
                    {icon("trash")}
                </Button>
            </div>
        </div>
    }
}
