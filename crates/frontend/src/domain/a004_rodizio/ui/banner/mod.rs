use crate::layout::use_order;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Card};

/// Карточка rodízio: цена за человека, переключатель режима и обратный отсчёт
///
/// Отсчёт берётся статичной строкой из настроек, реального таймера нет.
#[component]
pub fn RodizioBanner() -> impl IntoView {
    let order = use_order();
    let settings = order.settings();
    let price = format_money(settings.rodizio.price_per_person, &settings.currency);
    let duration = settings.rodizio.duration_label();

    let is_active = move || order.rodizio.with(|r| r.active);

    view! {
        <section class="rodizio-section">
            <Card class="rodizio-card">
                <div class="rodizio-card__row">
                    <div class="rodizio-card__text">
                        <h2 class="rodizio-card__title">"Rodízio Premium"</h2>
                        <p class="rodizio-card__subtitle">
                            {format!("Acesso ilimitado ao nosso cardápio especial por {}", duration)}
                        </p>
                    </div>
                    <div class="rodizio-card__actions">
                        <div class="rodizio-card__price">
                            <div class="rodizio-card__price-value">{price}</div>
                            <div class="rodizio-card__price-unit">"por pessoa"</div>
                        </div>
                        <Button
                            size=ButtonSize::Large
                            appearance=Signal::derive(move || {
                                if is_active() { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                            })
                            on_click=move |_| order.toggle_rodizio()
                        >
                            {move || if is_active() {
                                view! { {icon("clock")} "Modo Ativo" }.into_any()
                            } else {
                                view! { "Ativar Rodízio" }.into_any()
                            }}
                        </Button>
                    </div>
                </div>
                {move || order.countdown().map(|time| view! {
                    <div class="rodizio-card__countdown">
                        <span class="rodizio-card__countdown-label">"Tempo restante:"</span>
                        <span class="rodizio-card__countdown-value">{time}</span>
                    </div>
                })}
            </Card>
        </section>
    }
}
