//! Контракты ресторанного приложения: каталог, корзина, режим rodízio и оформление заказа.
//!
//! Крейт не зависит от браузера и компилируется как в wasm, так и нативно,
//! поэтому вся логика состояния и её тесты живут здесь.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
