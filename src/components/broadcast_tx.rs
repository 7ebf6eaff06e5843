use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, CopyButton, Field};
use crate::models::{AlertKind, BroadcastTxRequest};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};

const FALLBACK_ERROR: &str = "Broadcast failed";

#[function_component(BroadcastTx)]
pub fn broadcast_tx() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let psbt = use_state(String::new);
    let status = use_state(Submission::<String>::default);

    let busy = status.is_busy();

    let onsubmit = {
        let psbt = psbt.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_busy() {
                return;
            }
            let request = match BroadcastTxRequest::from_form(&psbt) {
                Ok(request) => request,
                Err(msg) => {
                    reject(&status, msg);
                    return;
                }
            };
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.broadcast_tx(&request).await
            });
        })
    };

    html! {
        <div class="page" aria-label="Broadcast Transaction">
            <h2 class="page-title">{"Broadcast Transaction"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="broadcast-psbt"
                    label="Signed PSBT (base64)"
                    placeholder="Paste your fully signed PSBT here"
                    value={(*psbt).clone()}
                    oninput={edit_callback(psbt.clone(), status.clone())}
                    disabled={busy}
                    multiline=true
                    helper={AttrValue::Static("Ensure your PSBT is fully signed and in base64 format.")}
                />
                <button
                    type="submit"
                    disabled={psbt.is_empty() || busy}
                    class={classes!("btn", "btn-primary", busy.then_some("loading"))}
                    aria-busy={busy.to_string()}
                >
                    { if busy { "Broadcasting..." } else { "Broadcast" } }
                </button>
            </form>

            if let Some(txid) = status.success() {
                <Alert kind={AlertKind::Success}>
                    {"Transaction broadcast!"}<br />
                    <strong>{"TxID: "}</strong>
                    <code class="txid-text">{ txid.clone() }</code>
                    <CopyButton text={txid.clone()} title="Copy TXID" />
                </Alert>
            }

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }
        </div>
    }
}
