use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, CopyButton, Field};
use crate::models::{AlertKind, SendToAddressRequest};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};

const FALLBACK_ERROR: &str = "Failed to send transaction.";

#[function_component(SendToAddress)]
pub fn send_to_address() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let wallet_name = use_state(String::new);
    let recipient = use_state(String::new);
    let amount = use_state(String::new);
    let status = use_state(Submission::<String>::default);

    let busy = status.is_busy();
    let incomplete = wallet_name.is_empty() || recipient.is_empty() || amount.is_empty();

    let onsubmit = {
        let wallet_name = wallet_name.clone();
        let recipient = recipient.clone();
        let amount = amount.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_busy() {
                return;
            }
            let request = match SendToAddressRequest::from_form(&wallet_name, &recipient, &amount) {
                Ok(request) => request,
                Err(msg) => {
                    reject(&status, msg);
                    return;
                }
            };
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.send_to_address(&request).await
            });
        })
    };

    html! {
        <div class="page" aria-label="Send Bitcoin">
            <h2 class="page-title">{"Send Bitcoin"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="send-wallet-name"
                    label="Wallet Name (Sender)"
                    placeholder="Enter your wallet name"
                    value={(*wallet_name).clone()}
                    oninput={edit_callback(wallet_name.clone(), status.clone())}
                    disabled={busy}
                />
                <Field
                    id="send-recipient"
                    label="Recipient Address"
                    placeholder="Enter recipient's Bitcoin address"
                    value={(*recipient).clone()}
                    oninput={edit_callback(recipient.clone(), status.clone())}
                    disabled={busy}
                />
                <Field
                    id="send-amount"
                    label="Amount (BTC)"
                    placeholder="Enter amount to send"
                    value={(*amount).clone()}
                    oninput={edit_callback(amount.clone(), status.clone())}
                    disabled={busy}
                    decimal=true
                />
                <button
                    type="submit"
                    disabled={incomplete || busy}
                    class={classes!("btn", "btn-primary", busy.then_some("loading"))}
                    aria-busy={busy.to_string()}
                >
                    { if busy { "Sending..." } else { "Send Bitcoin" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            if let Some(txid) = status.success() {
                <Alert kind={AlertKind::Success}>
                    {"Transaction sent!"}<br />
                    <strong>{"TxID: "}</strong>
                    <code class="txid-text">{ txid.clone() }</code>
                    <CopyButton text={txid.clone()} title="Copy TXID" />
                </Alert>
            }
        </div>
    }
}
