use serde_json::Value;
use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, CopyButton, Field};
use crate::models::{signed_psbt_text, AlertKind, SignTxRequest};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};

const FALLBACK_ERROR: &str = "Failed to sign PSBT.";

#[function_component(SignTx)]
pub fn sign_tx() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let wallet_name = use_state(String::new);
    let psbt = use_state(String::new);
    let status = use_state(Submission::<Value>::default);

    let busy = status.is_busy();

    let onsubmit = {
        let wallet_name = wallet_name.clone();
        let psbt = psbt.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_busy() {
                return;
            }
            let request = match SignTxRequest::from_form(&wallet_name, &psbt) {
                Ok(request) => request,
                Err(msg) => {
                    reject(&status, msg);
                    return;
                }
            };
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.sign_tx(&request).await
            });
        })
    };

    let signed = status.success().map(signed_psbt_text);

    html! {
        <div class="page" aria-label="Sign PSBT">
            <h2 class="page-title">{"Sign PSBT"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="sign-wallet-name"
                    label="Wallet Name"
                    placeholder="Enter wallet name"
                    value={(*wallet_name).clone()}
                    oninput={edit_callback(wallet_name.clone(), status.clone())}
                    disabled={busy}
                />
                <Field
                    id="sign-psbt"
                    label="PSBT (Partially Signed Bitcoin Transaction)"
                    placeholder="Paste your PSBT here"
                    value={(*psbt).clone()}
                    oninput={edit_callback(psbt.clone(), status.clone())}
                    disabled={busy}
                    multiline=true
                    helper={AttrValue::Static("Ensure the PSBT is in the correct format (usually base64).")}
                />
                <button
                    type="submit"
                    disabled={wallet_name.is_empty() || psbt.is_empty() || busy}
                    class={classes!("btn", "btn-primary", busy.then_some("loading"))}
                    aria-busy={busy.to_string()}
                >
                    { if busy { "Signing..." } else { "Sign Transaction" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            if let Some(signed) = signed {
                <div class="result-block">
                    <p class="result-label">{"Signed PSBT:"}</p>
                    <textarea class="input input-multiline mono" rows="6" readonly=true value={signed.clone()} />
                    <CopyButton text={signed.clone()} title="Copy signed PSBT" />
                </div>
            }
        </div>
    }
}
