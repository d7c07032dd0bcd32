use super::menu::{Menu, MenuError, RestaurantSettings};
use crate::domain::a001_category::Category;
use crate::domain::a002_product::Product;
use anyhow::Context;
use serde::Deserialize;

/// Структура файла меню (TOML)
#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    pub restaurant: RestaurantSettings,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Default menu embedded in the binary
pub const DEFAULT_MENU: &str = r#"
[restaurant]
name = "Sabores do Japão"
currency = "R$"

[restaurant.rodizio]
price_per_person = 59.90
duration_minutes = 120
countdown_placeholder = "1:45:30"

[[categories]]
id = "all"
name = "Todos"
count = 15
icon = "🍽️"

[[categories]]
id = "sushi"
name = "Sushi"
count = 6
icon = "🍣"

[[categories]]
id = "sashimi"
name = "Sashimi"
count = 4
icon = "🐟"

[[categories]]
id = "yakisoba"
name = "Yakisoba"
count = 3
icon = "🍜"

[[categories]]
id = "bebidas"
name = "Bebidas"
count = 2
icon = "🥤"

[[products]]
id = "1"
name = "Combo Salmão Premium"
description = "6 peças de sushi de salmão fresco com arroz temperado"
price = 28.90
image = "/assets/tuna-nigiri.jpg"
category = "sushi"
is_rodizio = true

[[products]]
id = "2"
name = "Sashimi de Salmão"
description = "Fatias frescas de salmão, cortadas na hora"
price = 32.90
image = "/assets/salmon-sashimi.jpg"
category = "sashimi"
is_rodizio = true

[[products]]
id = "3"
name = "Yakisoba Especial"
description = "Macarrão frito com legumes e molho especial da casa"
price = 24.90
image = "/assets/yakisoba.jpg"
category = "yakisoba"
is_rodizio = true

[[products]]
id = "4"
name = "Sake Premium"
description = "Sake japonês tradicional, servido quente ou gelado"
price = 15.90
image = "/assets/sake.jpg"
category = "bebidas"
is_rodizio = false
"#;

/// Разобрать и проверить меню из TOML
pub fn parse_menu(contents: &str) -> Result<Menu, MenuError> {
    let config: MenuConfig = toml::from_str(contents)?;
    Menu::new(config.restaurant, config.categories, config.products)
}

/// Load the embedded default menu
///
/// Меню статично и собирается в бинарник; внешних источников нет.
pub fn load_menu() -> anyhow::Result<Menu> {
    log::info!("Using default embedded menu");
    let menu = parse_menu(DEFAULT_MENU).context("embedded default menu is invalid")?;
    log::debug!(
        "Menu loaded: {} categories, {} products",
        menu.list_categories().len(),
        menu.products().len()
    );
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::ALL_CATEGORIES;
    use crate::domain::a002_product::ProductCatalog;
    use crate::domain::a002_product::ProductId;

    #[test]
    fn test_default_menu_loads() {
        let menu = load_menu();
        assert!(menu.is_ok());
        let menu = menu.unwrap();
        assert_eq!(menu.settings().currency, "R$");
        assert_eq!(menu.settings().rodizio.price_per_person, 59.90);
        assert_eq!(menu.settings().rodizio.countdown_placeholder, "1:45:30");
    }

    #[test]
    fn test_categories_keep_order() {
        let menu = load_menu().unwrap();
        let ids: Vec<&str> = menu.list_categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "sushi", "sashimi", "yakisoba", "bebidas"]);
        assert_eq!(menu.list_categories()[0].id.as_str(), ALL_CATEGORIES);
        assert_eq!(menu.list_categories()[0].count, 15);
        assert_eq!(menu.list_categories()[1].icon.as_deref(), Some("🍣"));
    }

    #[test]
    fn test_products_and_flags() {
        let menu = load_menu().unwrap();
        let combo = menu.find_product(&ProductId::new("1")).unwrap();
        assert_eq!(combo.price, 28.90);
        assert!(combo.is_rodizio);
        let sake = menu.find_product(&ProductId::new("4")).unwrap();
        assert!(!sake.is_rodizio);
    }

    const MINIMAL_HEADER: &str = r#"
[restaurant]
name = "Teste"
currency = "R$"
"#;

    #[test]
    fn test_rodizio_settings_default_when_absent() {
        let menu = parse_menu(MINIMAL_HEADER).unwrap();
        assert_eq!(menu.settings().rodizio.duration_minutes, 120);
        assert!(menu.products().is_empty());
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let toml = format!(
            "{}{}",
            MINIMAL_HEADER,
            r#"
[[categories]]
id = "sushi"
name = "Sushi"
count = 1

[[products]]
id = "1"
name = "A"
description = ""
price = 1.0
image = ""
category = "sushi"

[[products]]
id = "1"
name = "B"
description = ""
price = 2.0
image = ""
category = "sushi"
"#
        );
        assert!(matches!(parse_menu(&toml), Err(MenuError::DuplicateProduct(id)) if id == "1"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml = format!(
            "{}{}",
            MINIMAL_HEADER,
            r#"
[[products]]
id = "1"
name = "A"
description = ""
price = 1.0
image = ""
category = "sobremesas"
"#
        );
        assert!(matches!(
            parse_menu(&toml),
            Err(MenuError::UnknownCategory { category, .. }) if category == "sobremesas"
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let toml = format!(
            "{}{}",
            MINIMAL_HEADER,
            r#"
[[categories]]
id = "sushi"
name = "Sushi"
count = 1

[[products]]
id = "1"
name = "A"
description = ""
price = -5.0
image = ""
category = "sushi"
"#
        );
        assert!(matches!(parse_menu(&toml), Err(MenuError::InvalidProduct { .. })));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let toml = format!(
            "{}{}",
            MINIMAL_HEADER,
            r#"
[[categories]]
id = "sushi"
name = "Sushi"
count = 1

[[categories]]
id = "sushi"
name = "Sushi 2"
count = 1
"#
        );
        assert!(matches!(parse_menu(&toml), Err(MenuError::DuplicateCategory(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(parse_menu("[restaurant"), Err(MenuError::Parse(_))));
    }
}
