use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, CopyButton, Field};
use crate::models::{AlertKind, CreateTxRequest, CreateTxResponse};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};
use crate::utils::qr_image_src;

const FALLBACK_ERROR: &str = "Failed to create transaction.";

#[function_component(CreateTx)]
pub fn create_tx() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let wallet_name = use_state(String::new);
    let recipient = use_state(String::new);
    let amount = use_state(String::new);
    let status = use_state(Submission::<CreateTxResponse>::default);

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
            let request = match CreateTxRequest::from_form(&wallet_name, &recipient, &amount) {
                Ok(request) => request,
                Err(msg) => {
                    reject(&status, msg);
                    return;
                }
            };
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.create_tx(&request).await
            });
        })
    };

    let qr_code = status.success().and_then(|res| res.qr_code.clone());
    let qr_src = use_memo(qr_code, |qr_code| qr_code.as_deref().and_then(qr_image_src));

    html! {
        <div class="page" aria-label="Create PSBT">
            <h2 class="page-title">{"Create PSBT (Partially Signed Bitcoin Transaction)"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="create-wallet-name"
                    label="Wallet Name"
                    placeholder="Wallet Name"
                    value={(*wallet_name).clone()}
                    oninput={edit_callback(wallet_name.clone(), status.clone())}
                    disabled={busy}
                />
                <Field
                    id="create-recipient"
                    label="Recipient Address"
                    placeholder="Recipient Address"
                    value={(*recipient).clone()}
                    oninput={edit_callback(recipient.clone(), status.clone())}
                    disabled={busy}
                />
                <Field
                    id="create-amount"
                    label="Amount (BTC)"
                    placeholder="Amount"
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
                    { if busy { "Creating..." } else { "Create Transaction" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            if let Some(res) = status.success() {
                if let Some(src) = (*qr_src).clone() {
                    <div class="qr-container">
                        <p class="result-label">{"PSBT QR Code:"}</p>
                        <img src={src} alt="PSBT QR Code" class="qr-code" />
                    </div>
                }
                if let Some(psbt) = res.psbt.clone() {
                    <div class="result-block">
                        <p class="result-label">{"Raw PSBT:"}</p>
                        <textarea class="input input-multiline mono" rows="4" readonly=true value={psbt.clone()} />
                        <CopyButton text={psbt.clone()} title="Copy PSBT" />
                    </div>
                }
            }
        </div>
    }
}
