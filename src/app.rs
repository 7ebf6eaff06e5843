use log::info;
use yew::prelude::*;

use crate::api::WalletApi;
use crate::components::*;
use crate::config::ApiConfig;
use crate::models::Tab;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn render_tab(tab: Tab) -> Html {
    match tab {
        Tab::CreateTx => html! { <CreateTx key={tab.key()} /> },
        Tab::GenerateAddress => html! { <GenerateAddress key={tab.key()} /> },
        Tab::GetBalance => html! { <GetBalance key={tab.key()} /> },
        Tab::ListTransactions => html! { <ListTransactions key={tab.key()} /> },
        Tab::SendToAddress => html! { <SendToAddress key={tab.key()} /> },
        Tab::SignTx => html! { <SignTx key={tab.key()} /> },
        Tab::BroadcastTx => html! { <BroadcastTx key={tab.key()} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let api = use_state(|| WalletApi::new(ApiConfig::load()));
    let active = use_state(Tab::default);

    let tabs = Tab::ALL.iter().map(|&tab| {
        let selected = *active == tab;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                if *active != tab {
                    info!("Switching to {}", tab.label());
                    active.set(tab);
                }
            })
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("tab", selected.then_some("active"))}
                aria-selected={selected.to_string()}
                {onclick}
            >
                { tab.label() }
            </button>
        }
    });

    html! {
        <ContextProvider<WalletApi> context={(*api).clone()}>
            <div class="app-container">
                <header class="app-header">
                    <h1 class="app-title">{"Bitcoin Regtest Wallet"}</h1>
                </header>
                <nav class="tabs" role="tablist" aria-label="Wallet operations">
                    { for tabs }
                </nav>
                <main class="tab-panel" role="tabpanel" aria-label={active.label()}>
                    { render_tab(*active) }
                </main>
                <footer class="app-footer">
                    <span class="footer-backend">{ format!("Wallet service: {}", api.base_url()) }</span>
                    <span class="footer-version">{ format!("v{}", VERSION) }</span>
                </footer>
            </div>
        </ContextProvider<WalletApi>>
    }
}
