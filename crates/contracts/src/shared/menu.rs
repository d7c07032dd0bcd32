//! Каталог меню: категории, товары и настройки ресторана

use crate::domain::a001_category::Category;
use crate::domain::a002_product::{Product, ProductCatalog, ProductId};
use crate::domain::a004_rodizio::RodizioSettings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Ошибки загрузки и проверки меню
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to parse menu: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate product id '{0}'")]
    DuplicateProduct(String),

    #[error("product '{product}' refers to unknown category '{category}'")]
    UnknownCategory { product: String, category: String },

    #[error("invalid category '{id}': {reason}")]
    InvalidCategory { id: String, reason: String },

    #[error("invalid product '{id}': {reason}")]
    InvalidProduct { id: String, reason: String },
}

/// Общие настройки ресторана
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    pub name: String,
    /// Символ валюты для отображения ("R$")
    pub currency: String,
    #[serde(default)]
    pub rodizio: RodizioSettings,
}

/// Неизменяемый каталог меню
///
/// Создаётся только через [`Menu::new`], поэтому уникальность идентификаторов
/// и ссылки товаров на категории всегда проверены.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    settings: RestaurantSettings,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Menu {
    pub fn new(
        settings: RestaurantSettings,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, MenuError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            category.validate().map_err(|reason| MenuError::InvalidCategory {
                id: category.id.to_string(),
                reason,
            })?;
            if !category_ids.insert(category.id.as_str()) {
                return Err(MenuError::DuplicateCategory(category.id.to_string()));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            product.validate().map_err(|reason| MenuError::InvalidProduct {
                id: product.id.to_string(),
                reason,
            })?;
            if !product_ids.insert(product.id.as_str()) {
                return Err(MenuError::DuplicateProduct(product.id.to_string()));
            }
            if !category_ids.contains(product.category.as_str()) {
                return Err(MenuError::UnknownCategory {
                    product: product.id.to_string(),
                    category: product.category.to_string(),
                });
            }
        }

        Ok(Self {
            settings,
            categories,
            products,
        })
    }

    /// Категории в порядке конфигурации
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn settings(&self) -> &RestaurantSettings {
        &self.settings
    }
}

impl ProductCatalog for Menu {
    fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.find_product(id)
    }
}
