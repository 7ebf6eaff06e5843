use gloo_net::http::{Request, Response};
use log::{debug, error, info};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

use crate::config::ApiConfig;
use crate::models::{
    AddressResponse, BalanceResponse, BroadcastTxRequest, CreateTxRequest, CreateTxResponse,
    ErrorResponse, ListTxResponse, SendToAddressRequest, SignTxRequest, TxidResponse,
};
use crate::utils::encode_path_segment;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Unexpected response from wallet service: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse { error }) if !error.trim().is_empty() => ApiError::Backend {
                status,
                message: error,
            },
            _ => ApiError::Status(status),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn wallet_path(endpoint: &str, wallet_name: &str) -> String {
    format!("/{}/{}", endpoint, encode_path_segment(wallet_name))
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletApi {
    config: ApiConfig,
}

impl WalletApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub async fn create_tx(&self, req: &CreateTxRequest) -> Result<CreateTxResponse, ApiError> {
        self.post("/create-tx", req).await
    }

    pub async fn generate_address(&self, wallet_name: &str) -> Result<String, ApiError> {
        let res: AddressResponse = self.get(&wallet_path("generate-address", wallet_name)).await?;
        Ok(res.address)
    }

    pub async fn get_balance(&self, wallet_name: &str) -> Result<String, ApiError> {
        let res: BalanceResponse = self.get(&wallet_path("get-balance", wallet_name)).await?;
        Ok(res.display())
    }

    pub async fn list_transactions(&self, wallet_name: &str) -> Result<Vec<Value>, ApiError> {
        let res: ListTxResponse = self.get(&wallet_path("list-tx", wallet_name)).await?;
        Ok(res.into_transactions())
    }

    pub async fn send_to_address(&self, req: &SendToAddressRequest) -> Result<String, ApiError> {
        let res: TxidResponse = self.post("/send-to-address", req).await?;
        Ok(res.txid)
    }

    pub async fn sign_tx(&self, req: &SignTxRequest) -> Result<Value, ApiError> {
        self.post("/sign-tx", req).await
    }

    pub async fn broadcast_tx(&self, req: &BroadcastTxRequest) -> Result<String, ApiError> {
        let res: TxidResponse = self.post("/broadcast-tx", req).await?;
        Ok(res.txid)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        info!("GET {}", path);
        let resp = Request::get(&url).send().await.map_err(|e| {
            error!("GET {} failed: {}", path, e);
            ApiError::from(e)
        })?;
        read_json(path, resp).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        info!("POST {}", path);
        let resp = Request::post(&url).json(body)?.send().await.map_err(|e| {
            error!("POST {} failed: {}", path, e);
            ApiError::from(e)
        })?;
        read_json(path, resp).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    debug!("{} -> {} ({} bytes)", path, status, body.len());
    decode_body(status, &body).map_err(|e| {
        if let ApiError::Backend { status, message } = &e {
            error!("{} rejected with {}: {}", path, status, message);
        }
        e
    })
}

/// Client from the nearest `ContextProvider<WalletApi>`, or one built from the loaded config.
#[hook]
pub fn use_wallet_api() -> WalletApi {
    use_context::<WalletApi>().unwrap_or_else(|| WalletApi::new(ApiConfig::load()))
}
