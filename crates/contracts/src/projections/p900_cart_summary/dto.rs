use crate::domain::a003_cart::{Cart, CartGroups, CartLine, CartTotals};
use serde::{Deserialize, Serialize};

/// Тип секции в панели корзины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartSectionKind {
    /// Позиции rodízio (только в активном режиме)
    Rodizio,
    /// Дополнительные позиции (в активном режиме rodízio)
    Extras,
    /// Все позиции одним списком (режим rodízio выключен)
    Order,
}

impl CartSectionKind {
    /// Заголовок секции для UI
    pub fn title(&self) -> Option<&'static str> {
        match self {
            CartSectionKind::Rodizio => Some("Rodízio"),
            CartSectionKind::Extras => Some("Extras"),
            CartSectionKind::Order => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSection {
    pub kind: CartSectionKind,
    pub lines: Vec<CartLine>,
}

/// Проекция корзины для отображения: итоги и сгруппированные строки
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    pub totals: CartTotals,
    pub groups: CartGroups,
    /// Все строки в порядке добавления
    pub lines: Vec<CartLine>,
    #[serde(rename = "rodizioMode")]
    pub rodizio_mode: bool,
}

impl CartSummary {
    pub fn build(cart: &Cart, rodizio_mode: bool) -> Self {
        Self {
            totals: cart.compute_totals(),
            groups: cart.group_for_display(),
            lines: cart.lines().to_vec(),
            rodizio_mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Секции панели корзины
    ///
    /// В режиме rodízio строки делятся на "Rodízio" и "Extras" (пустые секции
    /// опускаются), иначе показываются одним списком в порядке добавления.
    pub fn sections(&self) -> Vec<CartSection> {
        if !self.rodizio_mode {
            if self.lines.is_empty() {
                return Vec::new();
            }
            return vec![CartSection {
                kind: CartSectionKind::Order,
                lines: self.lines.clone(),
            }];
        }

        let mut sections = Vec::with_capacity(2);
        if !self.groups.rodizio.is_empty() {
            sections.push(CartSection {
                kind: CartSectionKind::Rodizio,
                lines: self.groups.rodizio.clone(),
            });
        }
        if !self.groups.extra.is_empty() {
            sections.push(CartSection {
                kind: CartSectionKind::Extras,
                lines: self.groups.extra.clone(),
            });
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::ProductId;
    use crate::shared::config::load_menu;

    fn cart_with(ids: &[(&str, i32)]) -> Cart {
        let menu = load_menu().unwrap();
        let mut cart = Cart::new();
        for (id, qty) in ids {
            cart.add_to_cart(&menu, &ProductId::new(*id), *qty);
        }
        cart
    }

    fn kinds(sections: &[CartSection]) -> Vec<CartSectionKind> {
        sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_summary_totals() {
        let cart = cart_with(&[("1", 2), ("4", 1)]);
        let summary = CartSummary::build(&cart, false);
        assert_eq!(summary.totals.item_count, 3);
        assert_eq!(summary.totals.total_display(), "73.70");
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_sections_without_rodizio_mode() {
        let cart = cart_with(&[("4", 1), ("1", 1)]);
        let summary = CartSummary::build(&cart, false);
        let sections = summary.sections();
        assert_eq!(kinds(&sections), vec![CartSectionKind::Order]);
        assert_eq!(sections[0].lines.len(), 2);
        assert_eq!(sections[0].kind.title(), None);
    }

    #[test]
    fn test_sections_in_rodizio_mode() {
        let cart = cart_with(&[("4", 1), ("1", 1), ("2", 2)]);
        let summary = CartSummary::build(&cart, true);
        let sections = summary.sections();
        assert_eq!(kinds(&sections), vec![CartSectionKind::Rodizio, CartSectionKind::Extras]);
        assert_eq!(sections[0].lines.len(), 2);
        assert_eq!(sections[1].kind.title(), Some("Extras"));
    }

    #[test]
    fn test_sections_skip_empty_groups() {
        let cart = cart_with(&[("4", 2)]);
        let summary = CartSummary::build(&cart, true);
        assert_eq!(kinds(&summary.sections()), vec![CartSectionKind::Extras]);

        let empty = Cart::new();
        let summary = CartSummary::build(&empty, true);
        assert!(summary.is_empty());
        assert!(summary.sections().is_empty());
        assert!(CartSummary::build(&empty, false).sections().is_empty());
    }
}
