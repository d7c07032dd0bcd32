use crate::domain::a001_category::ui::tabs::CategoryTabs;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::layout::use_order;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Каталог: поиск, вкладки категорий и сетка отфильтрованных товаров
#[component]
#[allow(non_snake_case)]
pub fn ProductGrid() -> impl IntoView {
    let order = use_order();

    let search = Signal::derive(move || order.filter.with(|f| f.search.clone()));
    let products = Memo::new(move |_| order.filtered_products());
    let filter_active = move || order.filter.with(|f| f.is_active());

    view! {
        <section class="menu-section">
            <div class="menu-section__header">
                <h2 class="menu-section__title">"Nosso Cardápio"</h2>
                <p class="menu-section__subtitle">
                    "Descubra os sabores autênticos da culinária japonesa, "
                    "preparados com ingredientes frescos e técnicas tradicionais."
                </p>
            </div>

            <div class="menu-section__filters">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |term: String| order.set_search(term))
                    placeholder="Buscar pratos..."
                />
                <CategoryTabs />
            </div>

            <div class="product-grid">
                <For
                    each=move || products.get().into_iter().enumerate()
                    key=|(_, product)| product.id.clone()
                    children=move |(index, product)| view! { <ProductCard product=product index=index /> }
                />
            </div>

            <Show when=move || products.with(|p| p.is_empty())>
                <div class="menu-section__empty">
                    <p class="menu-section__empty-title">"Nenhum produto encontrado"</p>
                    <p>"Tente ajustar os filtros ou termo de busca"</p>
                    <Show when=filter_active>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| order.clear_filters()
                        >
                            "Limpar filtros"
                        </Button>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
