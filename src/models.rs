use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{is_blank, parse_amount, strip_newlines};

pub const AMOUNT_ERROR: &str = "Amount must be a positive number.";
pub const WALLET_NAME_ERROR: &str = "Wallet name cannot be empty.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    CreateTx,
    GenerateAddress,
    GetBalance,
    ListTransactions,
    SendToAddress,
    SignTx,
    BroadcastTx,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::CreateTx,
        Tab::GenerateAddress,
        Tab::GetBalance,
        Tab::ListTransactions,
        Tab::SendToAddress,
        Tab::SignTx,
        Tab::BroadcastTx,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::CreateTx => "Create Tx",
            Tab::GenerateAddress => "Generate Address",
            Tab::GetBalance => "Get Balance",
            Tab::ListTransactions => "List Transactions",
            Tab::SendToAddress => "Send To Address",
            Tab::SignTx => "Sign Tx",
            Tab::BroadcastTx => "Broadcast Tx",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::CreateTx => "create-tx",
            Tab::GenerateAddress => "generate-address",
            Tab::GetBalance => "get-balance",
            Tab::ListTransactions => "list-tx",
            Tab::SendToAddress => "send-to-address",
            Tab::SignTx => "sign-tx",
            Tab::BroadcastTx => "broadcast-tx",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    pub fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert-error",
            AlertKind::Success => "alert-success",
            AlertKind::Info => "alert-info",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert",
            AlertKind::Success | AlertKind::Info => "status",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTxRequest {
    pub wallet_name: String,
    pub outputs: Vec<BTreeMap<String, f64>>,
}

impl CreateTxRequest {
    pub fn from_form(wallet_name: &str, recipient: &str, amount: &str) -> Result<Self, String> {
        if is_blank(wallet_name) || is_blank(recipient) || is_blank(amount) {
            return Err("All fields (Wallet Name, Recipient Address, Amount) are required.".into());
        }
        let amount = parse_amount(amount).ok_or(AMOUNT_ERROR)?;
        let mut output = BTreeMap::new();
        output.insert(recipient.to_string(), amount);
        Ok(Self {
            wallet_name: wallet_name.to_string(),
            outputs: vec![output],
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTxResponse {
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub psbt: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendToAddressRequest {
    pub wallet_name: String,
    pub address: String,
    pub amount: f64,
}

impl SendToAddressRequest {
    pub fn from_form(wallet_name: &str, address: &str, amount: &str) -> Result<Self, String> {
        if is_blank(wallet_name) || is_blank(address) || is_blank(amount) {
            return Err("All fields are required.".into());
        }
        let amount = parse_amount(amount).ok_or(AMOUNT_ERROR)?;
        Ok(Self {
            wallet_name: wallet_name.to_string(),
            address: address.to_string(),
            amount,
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignTxRequest {
    pub wallet_name: String,
    pub psbt: String,
}

impl SignTxRequest {
    pub fn from_form(wallet_name: &str, psbt: &str) -> Result<Self, String> {
        if is_blank(wallet_name) || is_blank(psbt) {
            return Err("Wallet name and PSBT are required.".into());
        }
        Ok(Self {
            wallet_name: wallet_name.to_string(),
            psbt: strip_newlines(psbt),
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BroadcastTxRequest {
    pub psbt: String,
}

impl BroadcastTxRequest {
    pub fn from_form(psbt: &str) -> Result<Self, String> {
        if is_blank(psbt) {
            return Err("Signed PSBT cannot be empty.".into());
        }
        Ok(Self {
            psbt: strip_newlines(psbt),
        })
    }
}

pub fn wallet_name_from_form(wallet_name: &str) -> Result<String, String> {
    if is_blank(wallet_name) {
        Err(WALLET_NAME_ERROR.into())
    } else {
        Ok(wallet_name.to_string())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AddressResponse {
    pub address: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BalanceResponse {
    pub balance: Value,
}

impl BalanceResponse {
    pub fn display(&self) -> String {
        match &self.balance {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ListTxResponse {
    #[serde(default)]
    pub transactions: Option<Vec<Value>>,
}

impl ListTxResponse {
    pub fn into_transactions(self) -> Vec<Value> {
        self.transactions.unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TxidResponse {
    pub txid: String,
}

/// Signed PSBT out of a `/sign-tx` body; unknown shapes are shown as raw JSON.
pub fn signed_psbt_text(body: &Value) -> String {
    match body.get("signedPsbt") {
        Some(Value::String(psbt)) if !psbt.is_empty() => psbt.clone(),
        _ => body.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TxSummary {
    pub primary: String,
    pub secondary: String,
}

const TXID_PREVIEW_CHARS: usize = 20;

pub fn tx_summary(tx: &Value) -> TxSummary {
    let txid: String = match tx.get("txid").and_then(Value::as_str) {
        Some(txid) => txid.chars().take(TXID_PREVIEW_CHARS).collect(),
        None => "N/A".to_string(),
    };
    TxSummary {
        primary: format!("TxID: {}...", txid),
        secondary: format!(
            "Confirmations: {}, Amount: {}",
            field_text(tx.get("confirmations")),
            field_text(tx.get("amount"))
        ),
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_tx_body_maps_recipient_to_amount() {
        let req = CreateTxRequest::from_form("w1", "bc1qexample", "0.5").unwrap();
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({ "walletName": "w1", "outputs": [{ "bc1qexample": 0.5 }] })
        );
    }

    #[test]
    fn create_tx_requires_every_field() {
        for (w, a, amt) in [("", "bc1q", "1"), ("w1", "  ", "1"), ("w1", "bc1q", "")] {
            assert_eq!(
                CreateTxRequest::from_form(w, a, amt).unwrap_err(),
                "All fields (Wallet Name, Recipient Address, Amount) are required."
            );
        }
    }

    #[test]
    fn create_tx_rejects_bad_amounts() {
        for amt in ["-1", "0", "abc"] {
            assert_eq!(
                CreateTxRequest::from_form("w1", "bc1qexample", amt).unwrap_err(),
                AMOUNT_ERROR
            );
        }
    }

    #[test]
    fn send_to_address_body() {
        let req = SendToAddressRequest::from_form("w1", "bc1qdest", "0.0001").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "walletName": "w1", "address": "bc1qdest", "amount": 0.0001 })
        );
        assert_eq!(
            SendToAddressRequest::from_form("w1", "", "1").unwrap_err(),
            "All fields are required."
        );
    }

    #[test]
    fn sign_tx_strips_newlines_before_building_body() {
        let req = SignTxRequest::from_form("w1", "cHNidP8B\nAAAA\r\nBBBB\n").unwrap();
        assert_eq!(req.psbt, "cHNidP8BAAAABBBB");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "walletName": "w1", "psbt": "cHNidP8BAAAABBBB" })
        );
        assert!(SignTxRequest::from_form("w1", "\n\n").is_err());
    }

    #[test]
    fn broadcast_requires_psbt() {
        assert_eq!(
            BroadcastTxRequest::from_form("   ").unwrap_err(),
            "Signed PSBT cannot be empty."
        );
        let req = BroadcastTxRequest::from_form("cHNi\ndP8=").unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "psbt": "cHNidP8=" }));
    }

    #[test]
    fn empty_wallet_name_is_rejected() {
        assert_eq!(wallet_name_from_form("").unwrap_err(), WALLET_NAME_ERROR);
        assert_eq!(wallet_name_from_form(" \t").unwrap_err(), WALLET_NAME_ERROR);
        assert_eq!(wallet_name_from_form("w1").unwrap(), "w1");
    }

    #[test]
    fn balance_display_accepts_numbers_and_strings() {
        let num: BalanceResponse = serde_json::from_value(json!({ "balance": 1.25 })).unwrap();
        let text: BalanceResponse = serde_json::from_value(json!({ "balance": "0.5" })).unwrap();
        assert_eq!(num.display(), "1.25");
        assert_eq!(text.display(), "0.5");
    }

    #[test]
    fn missing_or_null_transactions_are_empty() {
        let missing: ListTxResponse = serde_json::from_value(json!({})).unwrap();
        let null: ListTxResponse = serde_json::from_value(json!({ "transactions": null })).unwrap();
        assert!(missing.into_transactions().is_empty());
        assert!(null.into_transactions().is_empty());
    }

    #[test]
    fn signed_psbt_falls_back_to_raw_body() {
        assert_eq!(signed_psbt_text(&json!({ "signedPsbt": "cHNi" })), "cHNi");
        assert_eq!(
            signed_psbt_text(&json!({ "psbt": "cHNi", "complete": false })),
            r#"{"complete":false,"psbt":"cHNi"}"#
        );
    }

    #[test]
    fn summary_truncates_txid() {
        let tx = json!({
            "txid": "0123456789abcdef0123456789abcdef",
            "confirmations": 3,
            "amount": -0.25
        });
        let summary = tx_summary(&tx);
        assert_eq!(summary.primary, "TxID: 0123456789abcdef0123...");
        assert_eq!(summary.secondary, "Confirmations: 3, Amount: -0.25");
    }

    #[test]
    fn summary_marks_missing_fields() {
        let summary = tx_summary(&json!({ "category": "receive" }));
        assert_eq!(summary.primary, "TxID: N/A...");
        assert_eq!(summary.secondary, "Confirmations: N/A, Amount: N/A");
    }

    #[test]
    fn tabs_are_listed_in_display_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(
            labels,
            [
                "Create Tx",
                "Generate Address",
                "Get Balance",
                "List Transactions",
                "Send To Address",
                "Sign Tx",
                "Broadcast Tx"
            ]
        );
        assert_eq!(Tab::default(), Tab::CreateTx);
    }
}
