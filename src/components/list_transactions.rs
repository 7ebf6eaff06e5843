use serde_json::Value;
use yew::prelude::*;
use crate::api::use_wallet_api;
use crate::components::{Alert, Field};
use crate::models::{tx_summary, wallet_name_from_form, AlertKind};
use crate::state::{dispatch, edit_callback, reject, use_mounted, Submission};

const FALLBACK_ERROR: &str = "Failed to list transactions.";
const EMPTY_NOTICE: &str = "No transactions found for this wallet or wallet is empty.";

/// The empty notice only follows a call that succeeded with nothing in it.
fn shows_empty_notice(status: &Submission<Vec<Value>>) -> bool {
    status.success().is_some_and(|txs| txs.is_empty())
}

fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(ListTransactions)]
pub fn list_transactions() -> Html {
    let api = use_wallet_api();
    let mounted = use_mounted();
    let wallet_name = use_state(String::new);
    let status = use_state(Submission::<Vec<Value>>::default);
    let open_tx = use_state(|| None::<usize>);

    let busy = status.is_busy();

    let onsubmit = {
        let wallet_name = wallet_name.clone();
        let status = status.clone();
        let open_tx = open_tx.clone();
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
            open_tx.set(None);
            let api = api.clone();
            dispatch(status.clone(), mounted.clone(), FALLBACK_ERROR, async move {
                api.list_transactions(&name).await
            });
        })
    };

    let rows = status.success().map(|txs| {
        let count = txs.len();
        txs.iter()
            .enumerate()
            .map(|(index, tx)| {
                let summary = tx_summary(tx);
                let is_open = *open_tx == Some(index);
                let key = tx
                    .get("txid")
                    .and_then(Value::as_str)
                    .map(|txid| format!("{}-{}", txid, index))
                    .unwrap_or_else(|| index.to_string());
                let on_toggle = {
                    let open_tx = open_tx.clone();
                    Callback::from(move |_: MouseEvent| open_tx.set(toggle(*open_tx, index)))
                };
                html! {
                    <li class="tx-item" key={key}>
                        <button
                            type="button"
                            class={classes!("tx-summary", is_open.then_some("open"))}
                            onclick={on_toggle}
                            aria-expanded={is_open.to_string()}
                        >
                            <span class="tx-primary">{ summary.primary }</span>
                            <span class="tx-secondary">{ summary.secondary }</span>
                            <span class="tx-chevron">{ if is_open { "▲" } else { "▼" } }</span>
                        </button>
                        if is_open {
                            <pre class="tx-json">
                                { serde_json::to_string_pretty(tx).unwrap_or_else(|_| tx.to_string()) }
                            </pre>
                        }
                        if index + 1 < count {
                            <hr class="tx-divider" />
                        }
                    </li>
                }
            })
            .collect::<Html>()
    });

    let results = if shows_empty_notice(&status) {
        html! { <Alert kind={AlertKind::Info}>{ EMPTY_NOTICE }</Alert> }
    } else if let Some(rows) = rows {
        html! { <ul class="tx-list" aria-label="Wallet transactions">{ rows }</ul> }
    } else {
        html! {}
    };

    html! {
        <div class="page" aria-label="List Transactions">
            <h2 class="page-title">{"List Wallet Transactions"}</h2>
            <form class="page-form" {onsubmit}>
                <Field
                    id="list-wallet-name"
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
                    { if busy { "Fetching..." } else { "List Transactions" } }
                </button>
            </form>

            if let Some(err) = status.error() {
                <Alert kind={AlertKind::Error}>{ err }</Alert>
            }

            { results }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_success_shows_notice() {
        assert!(shows_empty_notice(&Submission::Success(vec![])));
    }

    #[test]
    fn notice_is_not_an_error_and_needs_a_result() {
        assert!(!shows_empty_notice(&Submission::Idle));
        assert!(!shows_empty_notice(&Submission::Submitting));
        assert!(!shows_empty_notice(&Submission::Failed("down".into())));
        assert!(!shows_empty_notice(&Submission::Success(vec![json!({ "txid": "a" })])));
    }

    #[test]
    fn only_one_row_is_open() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 2), None);
        assert_eq!(toggle(Some(2), 0), Some(0));
    }
}
