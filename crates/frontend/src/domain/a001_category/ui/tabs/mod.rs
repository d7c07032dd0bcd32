use crate::layout::use_order;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Вкладки категорий меню
///
/// Порядок вкладок совпадает с порядком категорий в конфигурации;
/// счётчик на вкладке информационный.
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let order = use_order();
    let categories: Vec<Category> = order.menu.with_value(|m| m.list_categories().to_vec());

    let active = move || order.filter.with(|f| f.category.selector().to_string());

    view! {
        <div class="category-tabs" role="tablist">
            {categories
                .into_iter()
                .map(|category| {
                    let selector = category.id.to_string();
                    let selector_for_class = selector.clone();
                    let selector_for_aria = selector.clone();
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if active() == selector_for_class {
                                    "category-tabs__tab category-tabs__tab--active"
                                } else {
                                    "category-tabs__tab"
                                }
                            }
                            aria-selected=move || (active() == selector_for_aria).to_string()
                            on:click=move |_| order.set_category(&selector)
                        >
                            {category.icon.clone().map(|i| view! { <span class="category-tabs__icon">{i}</span> })}
                            <span class="category-tabs__name">{category.name.clone()}</span>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                                {category.count}
                            </Badge>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
