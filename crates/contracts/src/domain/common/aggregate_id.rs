use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы каталога строковые (например, "1" или "sushi"),
/// поэтому трейт не требует `Copy`.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Общая проверка для строковых идентификаторов: пустые и пробельные запрещены
pub(crate) fn non_blank(s: &str, kind: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(format!("Invalid {}: identifier is empty", kind));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank("  sushi ", "category id"), Ok("sushi".to_string()));
    }

    #[test]
    fn test_non_blank_rejects_empty() {
        assert!(non_blank("", "product id").is_err());
        assert!(non_blank("   ", "product id").is_err());
    }
}
