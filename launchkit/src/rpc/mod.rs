//! Thin Sui JSON-RPC 2.0 client.
//!
//! The validators only need one read call (`suix_getCoinMetadata`), so this
//! wrapper stays deliberately small: one POST per call, no retries, no
//! connection pooling beyond what reqwest does by itself.
//!
//! The endpoint comes from the `SUI_RPC_URL` environment variable, falling
//! back to the public mainnet fullnode.

use serde::Deserialize;
use serde_json::{json, Value};
use std::env;

use crate::error::{RpcError, RpcResult};

/// Public mainnet fullnode used when `SUI_RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";

/// On-chain metadata describing a coin type.
///
/// Mirrors the `suix_getCoinMetadata` result object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadata {
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Sui JSON-RPC client.
///
/// Holds only connection configuration, no per-request state, so a single
/// handle is safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct SuiRpcClient {
    url: String,
    client: reqwest::Client,
}

impl SuiRpcClient {
    /// Create a client for an explicit endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the `SUI_RPC_URL` environment variable,
    /// defaulting to the public mainnet fullnode.
    pub fn from_env() -> Self {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let url = env::var("SUI_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        Self::new(url)
    }

    /// Issue a single JSON-RPC call and return the `result` value.
    async fn call(&self, method: &str, params: Value) -> RpcResult<Value> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| RpcError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Http(format!("HTTP error: {}", status)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.get("error") {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(-32603);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown RPC error")
                .to_string();
            return Err(RpcError::Rpc { code, message });
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| RpcError::InvalidResponse("missing result field".to_string()))
    }

    /// Look up the on-chain metadata for a coin type.
    ///
    /// Returns `Ok(None)` when the node answers with a null result, which is
    /// how Sui reports an unknown coin type.
    pub async fn coin_metadata(&self, coin_type: &str) -> RpcResult<Option<CoinMetadata>> {
        let result = self
            .call("suix_getCoinMetadata", json!([coin_type]))
            .await?;

        if result.is_null() {
            return Ok(None);
        }

        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn coin_metadata_parses_populated_result() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": {
                        "decimals": 9,
                        "name": "Sui",
                        "symbol": "SUI",
                        "description": "The native token of Sui",
                        "iconUrl": null,
                        "id": "0x587c29de216efd4219573e08a1f6964d4fa7cb714518c2c8a0f29abfa264327d"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let metadata = client
            .coin_metadata("0x2::sui::SUI")
            .await
            .unwrap()
            .expect("metadata should be present");

        assert_eq!(metadata.symbol, "SUI");
        assert_eq!(metadata.decimals, 9);
        assert!(metadata.icon_url.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn coin_metadata_maps_null_to_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":null}"#)
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let metadata = client.coin_metadata("0xdead::fake::FAKE").await.unwrap();
        assert!(metadata.is_none());
    }

    #[tokio::test]
    async fn coin_metadata_surfaces_rpc_error_object() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid struct type: garbage"}}"#,
            )
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let err = client.coin_metadata("garbage").await.unwrap_err();
        match err {
            RpcError::Rpc { code, message } => {
                assert_eq!(code, -32602);
                assert!(message.contains("Invalid struct type"));
            }
            other => panic!("expected RpcError::Rpc, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn coin_metadata_maps_http_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let err = client.coin_metadata("0x2::sui::SUI").await.unwrap_err();
        assert!(matches!(err, RpcError::Http(_)));
        assert!(err.to_string().contains("503"));
    }
}
