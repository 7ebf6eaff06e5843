use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, Field};
use crate::models::{wallet_name_from_form, AlertKind};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};
use crate::utils::format_balance;

const FALLBACK_ERROR: &str = "Failed to get balance.";

#[function_component(GetBalance)]
pub fn get_balance() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let wallet_name = use_state(String::new);
    let status = use_state(Submission::<String>::default);

    let busy = status.is_busy();

    let onsubmit = {
        let wallet_name = wallet_name.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_busy() {
                return;
            }
            let name = match wallet_name_from_form(&wallet_name) {
                Ok(name) => name,
                Err(msg) => {
                    reject(&status, msg);
                    return;
                }
            };
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.get_balance(&name).await
            });
        })
    };

    html! {
        <div class="page" aria-label="Get Balance">
            <h2 class="page-title">{"Get Wallet Balance"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="balance-wallet-name"
                    label="Wallet Name"
                    placeholder="Enter the wallet name"
                    value={(*wallet_name).clone()}
                    oninput={edit_callback(wallet_name.clone(), status.clone())}
                    disabled={busy}
                />
                <button
                    type="submit"
                    disabled={wallet_name.is_empty() || busy}
                    class={classes!("btn", "btn-primary", busy.then_some("loading"))}
                    aria-busy={busy.to_string()}
                >
                    { if busy { "Fetching..." } else { "Get Balance" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            if let Some(balance) = status.success() {
                <Alert kind={AlertKind::Success}>
                    <strong>{"Balance: "}</strong>{ format_balance(balance) }
                </Alert>
            }
        </div>
    }
}
