use crate::domain::a002_product::{Product, ProductCatalog, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Cart Line
// ============================================================================

/// Строка корзины
///
/// Название, цена, изображение и признак rodízio копируются из каталога в момент
/// создания строки и дальше не пересчитываются: цена в корзине остаётся
/// стабильной в течение сессии, даже если каталог изменится.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub image: String,
    #[serde(rename = "isRodizio")]
    pub is_rodizio: bool,
    /// Всегда >= 1, пока строка существует
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            is_rodizio: product.is_rodizio,
            quantity,
        }
    }

    /// Цена × количество, без округления
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// ============================================================================
// Read models
// ============================================================================

/// Итоги корзины
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    #[serde(rename = "itemCount")]
    pub item_count: u32,
    /// Сумма без округления; до 2 знаков округляется только при отображении
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

impl CartTotals {
    /// Посчитать итоги по строкам
    ///
    /// Количество суммируется с насыщением: несколько строк по `i32::MAX`
    /// не переполняют `u32`.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            item_count: lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity)),
            total_price: lines.iter().map(CartLine::subtotal).sum(),
        }
    }

    /// Сумма с двумя знаками после точки ("57.80")
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total_price)
    }
}

/// Строки корзины, разделённые на rodízio и дополнительные заказы
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartGroups {
    pub rodizio: Vec<CartLine>,
    pub extra: Vec<CartLine>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Результат операции над корзиной
///
/// Операции никогда не завершаются ошибкой; неизвестный товар только
/// сообщается вызывающему, корзина при этом не меняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    Updated,
    Removed,
    Unchanged,
    UnknownProduct,
}

impl CartChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, CartChange::Added | CartChange::Updated | CartChange::Removed)
    }
}

/// Что делать, если строки для товара ещё нет
enum WhenAbsent<'a> {
    Create(&'a Product),
    Ignore,
}

/// Корзина текущей сессии
///
/// Порядок строк соответствует порядку добавления. Ни одна операция не
/// оставляет строку с количеством <= 0. При десериализации те же правила
/// проверяются в [`TryFrom<Vec<CartLine>>`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Количество товара в корзине (0, если строки нет)
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// Установить количество товара из каталога (абсолютное значение, не приращение)
    ///
    /// - неизвестный товар: корзина не меняется;
    /// - строка есть: `new_quantity <= 0` удаляет её, иначе количество заменяется;
    /// - строки нет: при `new_quantity > 0` создаётся снимок товара из каталога.
    pub fn add_to_cart<C>(&mut self, catalog: &C, product_id: &ProductId, new_quantity: i32) -> CartChange
    where
        C: ProductCatalog + ?Sized,
    {
        let Some(product) = catalog.find_product(product_id) else {
            log::warn!("add_to_cart: unknown product '{}'", product_id);
            return CartChange::UnknownProduct;
        };
        self.set_quantity(product_id, new_quantity, WhenAbsent::Create(product))
    }

    /// Изменить количество существующей строки
    ///
    /// `quantity <= 0` равносильно [`Cart::remove_item`]. Новую строку не создаёт.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i32) -> CartChange {
        self.set_quantity(product_id, quantity, WhenAbsent::Ignore)
    }

    /// Удалить строку; повторный вызов ничего не делает
    pub fn remove_item(&mut self, product_id: &ProductId) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            CartChange::Unchanged
        } else {
            log::debug!("cart: removed '{}'", product_id);
            CartChange::Removed
        }
    }

    pub fn compute_totals(&self) -> CartTotals {
        CartTotals::from_lines(&self.lines)
    }

    pub fn group_for_display(&self) -> CartGroups {
        let (rodizio, extra): (Vec<CartLine>, Vec<CartLine>) =
            self.lines.iter().cloned().partition(|l| l.is_rodizio);
        CartGroups { rodizio, extra }
    }

    fn set_quantity(&mut self, product_id: &ProductId, quantity: i32, when_absent: WhenAbsent<'_>) -> CartChange {
        let position = self.lines.iter().position(|l| &l.product_id == product_id);

        match (position, when_absent) {
            (Some(_), _) if quantity <= 0 => self.remove_item(product_id),
            (Some(index), _) => {
                let line = &mut self.lines[index];
                let quantity = quantity.unsigned_abs();
                if line.quantity == quantity {
                    return CartChange::Unchanged;
                }
                line.quantity = quantity;
                log::debug!("cart: '{}' quantity -> {}", product_id, quantity);
                CartChange::Updated
            }
            (None, WhenAbsent::Create(product)) if quantity > 0 => {
                self.lines.push(CartLine::snapshot(product, quantity.unsigned_abs()));
                log::debug!("cart: added '{}' x{}", product_id, quantity);
                CartChange::Added
            }
            (None, _) => CartChange::Unchanged,
        }
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = String;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for line in &lines {
            if line.quantity == 0 {
                return Err(format!("cart line '{}' has zero quantity", line.product_id));
            }
            if !seen.insert(&line.product_id) {
                return Err(format!("duplicate cart line for product '{}'", line.product_id));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
