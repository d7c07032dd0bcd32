use crate::domain::a001_category::CategoryId;
use crate::domain::common::aggregate_id::non_blank;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара в каталоге
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn from_string(s: &str) -> Result<Self, String> {
        non_blank(s, "product id").map(ProductId)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Позиция меню (неизменяемая, задаётся каталогом)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: CategoryId,

    /// Входит ли позиция в rodízio
    #[serde(rename = "isRodizio", alias = "is_rodizio", default)]
    pub is_rodizio: bool,
}

impl Product {
    /// Совпадает ли название с поисковой строкой (без учёта регистра)
    ///
    /// `needle_lower` должен быть уже приведён к нижнему регистру.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        ProductId::from_string(self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price must be a non-negative number, got {}", self.price));
        }
        Ok(())
    }
}

/// Источник товаров для операций корзины
pub trait ProductCatalog {
    fn find_product(&self, id: &ProductId) -> Option<&Product>;
}

impl ProductCatalog for [Product] {
    fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.iter().find(|p| &p.id == id)
    }
}

impl ProductCatalog for Vec<Product> {
    fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.as_slice().find_product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sake() -> Product {
        Product {
            id: ProductId::new("4"),
            name: "Sake Premium".into(),
            description: "Sake japonês tradicional".into(),
            price: 15.90,
            image: "sake.jpg".into(),
            category: CategoryId::new("bebidas"),
            is_rodizio: false,
        }
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let product = sake();
        assert!(product.name_contains("sake"));
        assert!(product.name_contains("premium"));
        assert!(product.name_contains(""));
        assert!(!product.name_contains("yakisoba"));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product = sake();
        product.price = -1.0;
        assert!(product.validate().is_err());
        product.price = f64::NAN;
        assert!(product.validate().is_err());
        product.price = 0.0;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_slice_catalog_lookup() {
        let products = vec![sake()];
        assert!(products.find_product(&ProductId::new("4")).is_some());
        assert!(products.find_product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_rodizio_flag_defaults_to_false() {
        let json = r#"{"id":"9","name":"Chá","description":"","price":5.0,"image":"","category":"bebidas"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_rodizio);
    }
}
