use crate::layout::use_order;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Hero-блок страницы с названием ресторана и быстрым входом в rodízio
#[component]
pub fn Hero() -> impl IntoView {
    let order = use_order();
    let restaurant_name = order.settings().name;

    let start_rodizio = move |_| {
        if !order.rodizio.get_untracked().active {
            order.toggle_rodizio();
        }
    };

    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <span class="hero__kicker">{restaurant_name}</span>
                <h1 class="hero__title">
                    "Sabores Autênticos do"
                    <span class="hero__title-accent">"Japão"</span>
                </h1>
                <p class="hero__text">
                    "Experimente nossa seleção premium de sushi, sashimi e pratos quentes. "
                    "Rodízio livre ou pedidos à la carte."
                </p>
                <div class="hero__actions">
                    <Button
                        size=ButtonSize::Large
                        appearance=ButtonAppearance::Primary
                        on_click=start_rodizio
                    >
                        {icon("users")}
                        "Iniciar Rodízio"
                    </Button>
                    <Button
                        size=ButtonSize::Large
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| log::info!("table QR scan is not available in this build")
                    >
                        {icon("qr")}
                        "Escanear Mesa"
                    </Button>
                </div>
            </div>
        </section>
    }
}
