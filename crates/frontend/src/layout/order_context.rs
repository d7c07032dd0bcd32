//! Состояние заказа текущей сессии браузера
//!
//! Единственный владелец корзины, фильтра каталога и режима rodízio.
//! Компоненты получают его через [`use_order`] и превращают действия
//! пользователя в вызовы операций из `contracts`.

use chrono::Utc;
use contracts::domain::a002_product::{Product, ProductFilter, ProductId};
use contracts::domain::a003_cart::{Cart, CartChange};
use contracts::domain::a004_rodizio::RodizioMode;
use contracts::projections::p900_cart_summary::CartSummary;
use contracts::shared::menu::{Menu, RestaurantSettings};
use contracts::usecases::common::UseCaseResult;
use contracts::usecases::u501_checkout::{checkout, CheckoutRequest, OrderSnapshot};
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct OrderContext {
    pub menu: StoredValue<Menu>,
    pub cart: RwSignal<Cart>,
    pub filter: RwSignal<ProductFilter>,
    pub rodizio: RwSignal<RodizioMode>,
    pub cart_open: RwSignal<bool>,
    pub last_order: RwSignal<Option<OrderSnapshot>>,
}

impl OrderContext {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu: StoredValue::new(menu),
            cart: RwSignal::new(Cart::new()),
            filter: RwSignal::new(ProductFilter::default()),
            rodizio: RwSignal::new(RodizioMode::default()),
            cart_open: RwSignal::new(false),
            last_order: RwSignal::new(None),
        }
    }

    pub fn settings(&self) -> RestaurantSettings {
        self.menu.with_value(|m| m.settings().clone())
    }

    pub fn currency(&self) -> String {
        self.menu.with_value(|m| m.settings().currency.clone())
    }

    // ========================================================================
    // Каталог
    // ========================================================================

    /// Товары после фильтра (реактивно зависит от `filter`)
    pub fn filtered_products(&self) -> Vec<Product> {
        let menu = self.menu;
        self.filter
            .with(|filter| menu.with_value(|m| filter.apply(m.products())))
    }

    pub fn set_category(&self, selector: &str) {
        log::debug!("filter: category -> '{}'", selector);
        self.filter.update(|f| f.set_category(selector));
    }

    pub fn set_search(&self, term: String) {
        self.filter.update(|f| f.set_search(term));
    }

    /// Сбросить категорию и поиск
    pub fn clear_filters(&self) {
        log::debug!("filter: cleared");
        self.filter.set(ProductFilter::default());
    }

    // ========================================================================
    // Корзина
    // ========================================================================

    /// Количество товара в корзине (реактивно)
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.cart.with(|c| c.quantity_of(product_id))
    }

    pub fn add_to_cart(&self, product_id: &ProductId, new_quantity: i32) {
        let menu = self.menu;
        let mut change = CartChange::Unchanged;
        self.cart.maybe_update(|cart| {
            change = menu.with_value(|m| cart.add_to_cart(m, product_id, new_quantity));
            change.is_changed()
        });
        log::debug!("add_to_cart('{}', {}) -> {:?}", product_id, new_quantity, change);
    }

    pub fn update_quantity(&self, product_id: &ProductId, quantity: i32) {
        let mut change = CartChange::Unchanged;
        self.cart.maybe_update(|cart| {
            change = cart.update_quantity(product_id, quantity);
            change.is_changed()
        });
        log::debug!("update_quantity('{}', {}) -> {:?}", product_id, quantity, change);
    }

    pub fn remove_item(&self, product_id: &ProductId) {
        self.cart.maybe_update(|cart| cart.remove_item(product_id).is_changed());
    }

    /// Итоги и группировка корзины (реактивно)
    pub fn summary(&self) -> CartSummary {
        let rodizio_active = self.rodizio.with(|r| r.active);
        self.cart.with(|c| CartSummary::build(c, rodizio_active))
    }

    pub fn toggle_cart(&self) {
        self.cart_open.update(|open| *open = !*open);
    }

    // ========================================================================
    // Rodízio
    // ========================================================================

    pub fn toggle_rodizio(&self) {
        self.rodizio.update(|mode| mode.toggle());
        log::info!("rodízio mode: {}", self.rodizio.get_untracked().active);
    }

    /// Строка обратного отсчёта (только в активном режиме)
    pub fn countdown(&self) -> Option<String> {
        let mode = self.rodizio.get();
        self.menu
            .with_value(|m| mode.countdown_label(&m.settings().rodizio).map(str::to_string))
    }

    // ========================================================================
    // Оформление заказа
    // ========================================================================

    /// Снимок корзины для внешнего обработчика заказов
    ///
    /// Корзина после оформления не очищается.
    pub fn checkout(&self) -> UseCaseResult<OrderSnapshot> {
        let rodizio_active = self.rodizio.get_untracked().active;
        let request = self
            .cart
            .with_untracked(|c| CheckoutRequest::from_cart(c, rodizio_active));
        let snapshot = checkout(request, Uuid::new_v4(), Utc::now())?;
        self.last_order.set(Some(snapshot.clone()));
        Ok(snapshot)
    }
}

pub fn use_order() -> OrderContext {
    use_context::<OrderContext>().expect("OrderContext context not found")
}
