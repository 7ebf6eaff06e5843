use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, CopyButton, Field};
use crate::models::{wallet_name_from_form, AlertKind};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};

const FALLBACK_ERROR: &str = "Failed to generate address.";

#[function_component(GenerateAddress)]
pub fn generate_address() -> Html {
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
                api.generate_address(&name).await
            });
        })
    };

    html! {
        <div class="page" aria-label="Generate Address">
            <h2 class="page-title">{"Generate New Address"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="generate-wallet-name"
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
                    { if busy { "Generating..." } else { "Generate Address" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            if let Some(address) = status.success() {
                <Alert kind={AlertKind::Success}>
                    <strong>{"New Address: "}</strong>
                    <code class="address-text">{ address.clone() }</code>
                    <CopyButton text={address.clone()} title="Copy address" />
                </Alert>
            }
        </div>
    }
}
