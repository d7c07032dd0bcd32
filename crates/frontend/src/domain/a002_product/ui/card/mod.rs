use crate::layout::use_order;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize};

/// Карточка товара в каталоге
///
/// Количество на карточке берётся из корзины, отдельного локального
/// состояния у карточки нет. Кнопки передают в корзину новое абсолютное
/// количество (текущее ± 1).
#[component]
pub fn ProductCard(
    product: Product,
    /// Позиция в сетке (для каскадной анимации)
    #[prop(optional)]
    index: usize,
) -> impl IntoView {
    let order = use_order();
    let currency = order.currency();

    let product_id = StoredValue::new(product.id.clone());
    let quantity = move || product_id.with_value(|id| order.quantity_of(id));

    let increment = move |_| {
        let next = quantity() as i32 + 1;
        product_id.with_value(|id| order.add_to_cart(id, next));
    };
    let decrement = move |_| {
        let current = quantity();
        if current > 0 {
            product_id.with_value(|id| order.add_to_cart(id, current as i32 - 1));
        }
    };

    let name = product.name.clone();
    let highlighted_name = move || order.filter.with(|f| highlight_matches(&name, &f.search));

    view! {
        <CardAnimated class="product-card" delay_ms=stagger_delay(index)>
            <div class="product-card__media">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy" />
                {product.is_rodizio.then(|| view! {
                    <span class="product-card__badge">
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            "Rodízio"
                        </Badge>
                    </span>
                })}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__title">{highlighted_name}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__footer">
                    <div>
                        <p class="product-card__price">{format_money(product.price, &currency)}</p>
                        <p class="product-card__category">{product.category.to_string()}</p>
                    </div>
                    <Show
                        when=move || { quantity() > 0 }
                        fallback=move || view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Primary
                                on_click=increment
                            >
                                {icon("plus")}
                                "Adicionar"
                            </Button>
                        }
                    >
                        <div class="quantity-stepper">
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=decrement
                            >
                                {icon("minus")}
                            </Button>
                            <span class="quantity-stepper__value">{quantity}</span>
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=increment
                            >
                                {icon("plus")}
                            </Button>
                        </div>
                    </Show>
                </div>
            </div>
        </CardAnimated>
    }
}
