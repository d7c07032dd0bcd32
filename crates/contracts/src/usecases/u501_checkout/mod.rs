pub mod request;
pub mod response;

pub use request::CheckoutRequest;
pub use response::OrderSnapshot;

use crate::domain::a003_cart::CartTotals;
use crate::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct Checkout;

impl UseCaseMetadata for Checkout {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "checkout"
    }

    fn display_name() -> &'static str {
        "Finalizar Pedido"
    }

    fn description() -> &'static str {
        "Фиксирует снимок корзины для передачи внешнему обработчику заказов"
    }
}

/// Оформить заказ: собрать снимок корзины
///
/// Протокол отправки заказа не определён; снимок возвращается вызывающему,
/// корзина не изменяется. Пустая корзина даёт ошибку `EMPTY_CART`.
pub fn checkout(
    request: CheckoutRequest,
    order_id: Uuid,
    created_at: DateTime<Utc>,
) -> UseCaseResult<OrderSnapshot> {
    if request.lines.is_empty() {
        return Err(UseCaseError::empty_cart());
    }
    if let Some(line) = request.lines.iter().find(|l| l.quantity == 0) {
        return Err(UseCaseError::validation("line with zero quantity")
            .with_details(line.product_id.to_string()));
    }

    let totals = CartTotals::from_lines(&request.lines);

    Ok(OrderSnapshot {
        order_id,
        created_at,
        rodizio_mode: request.rodizio_mode,
        lines: request.lines,
        item_count: totals.item_count,
        total_price: totals.total_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::ProductId;
    use crate::domain::a003_cart::Cart;
    use crate::shared::config::load_menu;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 19, 30, 0).unwrap()
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Checkout::full_name(), "u501_checkout");
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let request = CheckoutRequest::from_cart(&Cart::new(), false);
        let err = checkout(request, Uuid::nil(), fixed_time()).unwrap_err();
        assert_eq!(err.code, "EMPTY_CART");
    }

    #[test]
    fn test_checkout_snapshot() {
        let menu = load_menu().unwrap();
        let mut cart = Cart::new();
        cart.add_to_cart(&menu, &ProductId::new("1"), 2);
        cart.add_to_cart(&menu, &ProductId::new("4"), 1);

        let order_id = Uuid::new_v4();
        let snapshot = checkout(CheckoutRequest::from_cart(&cart, true), order_id, fixed_time()).unwrap();

        assert_eq!(snapshot.order_id, order_id);
        assert_eq!(snapshot.item_count, 3);
        assert_eq!(snapshot.totals().total_display(), "73.70");
        assert!(snapshot.rodizio_mode);
        assert_eq!(snapshot.lines.len(), 2);
        // корзина не изменилась
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_checkout_rejects_zero_quantity_line() {
        let json = r#"{
            "lines": [
                {"productId":"4","name":"Sake Premium","unitPrice":15.9,"image":"","isRodizio":false,"quantity":0}
            ],
            "rodizioMode": false
        }"#;
        let request: CheckoutRequest = serde_json::from_str(json).unwrap();

        let err = checkout(request, Uuid::nil(), fixed_time()).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.details.as_deref(), Some("4"));
    }

    #[test]
    fn test_snapshot_json_uses_wire_names() {
        let menu = load_menu().unwrap();
        let mut cart = Cart::new();
        cart.add_to_cart(&menu, &ProductId::new("2"), 1);

        let snapshot = checkout(CheckoutRequest::from_cart(&cart, false), Uuid::nil(), fixed_time()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["orderId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["lines"][0]["productId"], "2");
        assert_eq!(json["lines"][0]["isRodizio"], true);
        assert_eq!(json["lines"][0]["unitPrice"], 32.90);
    }
}
