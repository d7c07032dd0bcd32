use crate::app_shell::AppShell;
use crate::layout::OrderContext;
use contracts::shared::config::load_menu;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let content = match load_menu() {
        Ok(menu) => {
            // Provide the OrderContext store to the whole app via context.
            provide_context(OrderContext::new(menu));
            view! { <AppShell /> }.into_any()
        }
        Err(err) => {
            log::error!("Failed to load menu: {:#}", err);
            view! {
                <div class="load-error">
                    <h1>"Cardápio indisponível"</h1>
                    <p>"Não foi possível carregar o cardápio. Tente novamente mais tarde."</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <ConfigProvider>
            {content}
        </ConfigProvider>
    }
}
