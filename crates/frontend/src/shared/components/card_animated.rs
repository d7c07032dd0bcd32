//! CardAnimated: Thaw `Card` с анимацией появления для сетки каталога.
//!
//! Анимация `card-appear` определена в `styles/app.css`. Карточки каталога
//! получают возрастающую задержку, чтобы сетка проявлялась каскадом.

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 60;

/// Задержка анимации для карточки с индексом `index` (не больше 600 мс)
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS).min(600)
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
