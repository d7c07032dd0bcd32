use crate::domain::common::aggregate_id::non_blank;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Селектор, означающий "все категории"
pub const ALL_CATEGORIES: &str = "all";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории меню (например, "sushi")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for CategoryId {
    fn from_string(s: &str) -> Result<Self, String> {
        non_blank(s, "category id").map(CategoryId)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория меню
///
/// `count` носит информационный характер и не сверяется с каталогом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub count: u32,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    pub fn validate(&self) -> Result<(), String> {
        CategoryId::from_string(self.id.as_str())?;
        if self.name.trim().is_empty() {
            return Err("category name is empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Текущий выбор категории в фильтре каталога
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    /// Разбор селектора из UI: "all" и пустая строка означают все категории
    pub fn from_selector(selector: &str) -> Self {
        match CategoryId::from_string(selector) {
            Ok(id) if id.as_str() != ALL_CATEGORIES => CategoryFilter::Only(id),
            _ => CategoryFilter::All,
        }
    }

    /// Обратное преобразование в строку селектора
    pub fn selector(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id.as_str(),
        }
    }

    pub fn matches(&self, category: &CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selector_all() {
        assert_eq!(CategoryFilter::from_selector("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.selector(), "all");
    }

    #[test]
    fn test_from_selector_blank_means_all() {
        assert_eq!(CategoryFilter::from_selector("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selector(" sushi"),
            CategoryFilter::Only(CategoryId::new("sushi"))
        );
    }

    #[test]
    fn test_from_selector_specific() {
        let filter = CategoryFilter::from_selector("sushi");
        assert_eq!(filter, CategoryFilter::Only(CategoryId::new("sushi")));
        assert_eq!(filter.selector(), "sushi");
        assert!(filter.matches(&CategoryId::new("sushi")));
        assert!(!filter.matches(&CategoryId::new("sashimi")));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&CategoryId::new("bebidas")));
    }

    #[test]
    fn test_category_id_from_string() {
        assert_eq!(
            CategoryId::from_string(" yakisoba ").unwrap(),
            CategoryId::new("yakisoba")
        );
        assert!(CategoryId::from_string("").is_err());
    }

    #[test]
    fn test_category_validate() {
        let category = Category {
            id: CategoryId::new("sushi"),
            name: "".into(),
            count: 6,
            icon: None,
        };
        assert!(category.validate().is_err());
    }
}
