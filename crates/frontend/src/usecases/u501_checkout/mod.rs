pub mod view;

use crate::layout::OrderContext;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_checkout::{Checkout, OrderSnapshot};

/// Оформить заказ и записать снимок в консоль браузера
///
/// Обработчик заказов не подключён: снимок только логируется как JSON.
pub fn run_checkout(order: &OrderContext) -> UseCaseResult<OrderSnapshot> {
    let snapshot = match order.checkout() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::warn!("{}: {}", Checkout::full_name(), err);
            return Err(err);
        }
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(UseCaseError::from)?;
    log::info!("{}: Finalizar pedido {}\n{}", Checkout::full_name(), snapshot.order_id, json);
    Ok(snapshot)
}
