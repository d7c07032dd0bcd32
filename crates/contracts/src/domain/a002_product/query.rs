//! Запросы к каталогу: фильтр по категории и поиск по названию

use super::aggregate::Product;
use crate::domain::a001_category::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Отфильтровать товары по категории и подстроке названия
///
/// Пустая строка поиска пропускает все товары. Порядок каталога сохраняется,
/// отсутствие совпадений даёт пустой список.
pub fn filter_products(all: &[Product], category: &CategoryFilter, search_term: &str) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    all.iter()
        .filter(|p| category.matches(&p.category) && p.name_contains(&needle))
        .cloned()
        .collect()
}

/// Состояние фильтра каталога: выбранная категория и строка поиска
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl ProductFilter {
    pub fn set_category(&mut self, selector: &str) {
        self.category = CategoryFilter::from_selector(selector);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Сужает ли фильтр каталог
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.is_empty()
    }

    pub fn apply(&self, all: &[Product]) -> Vec<Product> {
        filter_products(all, &self.category, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_menu;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_all_with_empty_search_returns_full_catalog() {
        let menu = load_menu().unwrap();
        let result = filter_products(menu.products(), &CategoryFilter::All, "");
        assert_eq!(result, menu.products().to_vec());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_category_and_search_combined() {
        let menu = load_menu().unwrap();
        let result = filter_products(
            menu.products(),
            &CategoryFilter::from_selector("sushi"),
            "salmão",
        );
        assert_eq!(ids(&result), vec!["1"]);
        assert_eq!(result[0].name, "Combo Salmão Premium");
    }

    #[test]
    fn test_search_is_case_insensitive_across_categories() {
        let menu = load_menu().unwrap();
        let result = filter_products(menu.products(), &CategoryFilter::All, "SALMÃO");
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let menu = load_menu().unwrap();
        let result = filter_products(menu.products(), &CategoryFilter::from_selector("bebidas"), "sushi");
        assert!(result.is_empty());

        let unknown = filter_products(menu.products(), &CategoryFilter::from_selector("sobremesas"), "");
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_product_filter_state() {
        let menu = load_menu().unwrap();
        let mut filter = ProductFilter::default();
        assert!(!filter.is_active());

        filter.set_category("yakisoba");
        assert!(filter.is_active());
        assert_eq!(ids(&filter.apply(menu.products())), vec!["3"]);

        filter.set_category("all");
        filter.set_search("premium");
        assert_eq!(ids(&filter.apply(menu.products())), vec!["1", "4"]);

        filter.set_search("");
        assert!(!filter.is_active());
    }
}
