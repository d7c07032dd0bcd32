use crate::domain::a003_cart::{Cart, CartLine};
use serde::{Deserialize, Serialize};

/// Запрос на оформление заказа: снимок строк корзины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub lines: Vec<CartLine>,

    /// Был ли активен режим rodízio в момент оформления
    #[serde(rename = "rodizioMode", default)]
    pub rodizio_mode: bool,
}

impl CheckoutRequest {
    pub fn from_cart(cart: &Cart, rodizio_mode: bool) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            rodizio_mode,
        }
    }
}
