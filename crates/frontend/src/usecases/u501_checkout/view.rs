use super::run_checkout;
use crate::layout::use_order;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_checkout::Checkout;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Сколько показывать подтверждение после оформления, мс
const CONFIRMATION_MS: u32 = 2500;

#[component]
pub fn CheckoutButton() -> impl IntoView {
    let order = use_order();
    let (confirmed, set_confirmed) = signal(false);
    let (error_msg, set_error_msg) = signal::<Option<String>>(None);

    let handle_checkout = move |_| match run_checkout(&order) {
        Ok(_) => {
            set_error_msg.set(None);
            set_confirmed.set(true);

            // Скрыть подтверждение через пару секунд
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(CONFIRMATION_MS).await;
                set_confirmed.set(false);
            });
        }
        Err(err) => set_error_msg.set(Some(err.message)),
    };

    view! {
        <Button
            class="checkout-button"
            size=ButtonSize::Large
            appearance=ButtonAppearance::Primary
            on_click=handle_checkout
        >
            {Checkout::display_name()}
        </Button>
        <Show when=move || confirmed.get()>
            <p class="checkout-confirmation">
                {icon("check")}
                {move || order.last_order.with(|o| {
                    o.as_ref()
                        .map(|s| format!("Pedido enviado: {} itens", s.item_count))
                        .unwrap_or_default()
                })}
            </p>
        </Show>
        {move || error_msg.get().map(|msg| view! { <p class="checkout-error">{msg}</p> })}
    }
}
