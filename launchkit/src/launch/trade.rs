//! Transaction construction via the PumpPortal trade-local endpoint.
//!
//! The endpoint builds an unsigned `create` transaction for a new token and
//! answers with its raw serialized bytes. Nothing is signed or sent on-chain
//! here.

use serde_json::{json, Value};

use crate::error::{TradeError, TradeResult};
use crate::launch::LaunchOptions;

/// Production transaction-construction endpoint.
pub const DEFAULT_TRADE_ENDPOINT: &str = "https://pumpportal.fun/api/trade-local";

/// Slippage tolerance applied when the caller passes none, in basis points.
pub const DEFAULT_SLIPPAGE_BPS: u64 = 10;

/// Priority fee in SOL applied when the caller passes none.
pub const DEFAULT_PRIORITY_FEE: f64 = 0.0001;

/// Token metadata fields extracted from the upload response.
#[derive(Debug, Clone)]
pub struct CreateTokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

/// Build the JSON body for a `create` trade request.
///
/// Absent options fall back to the documented defaults: slippage 10 bps,
/// priority fee 0.0001 SOL, initial buy amount 0.
pub fn build_create_request(
    public_key: &str,
    mint: &str,
    metadata: &CreateTokenMetadata,
    options: &LaunchOptions,
) -> Value {
    json!({
        "publicKey": public_key,
        "action": "create",
        "tokenMetadata": {
            "name": metadata.name,
            "symbol": metadata.symbol,
            "uri": metadata.uri,
        },
        "mint": mint,
        "denominatedInSol": "true",
        "amount": options.initial_buy_amount.unwrap_or(0.0),
        "slippage": options.slippage_bps.unwrap_or(DEFAULT_SLIPPAGE_BPS),
        "priorityFee": options.priority_fee.unwrap_or(DEFAULT_PRIORITY_FEE),
        "pool": "pump",
    })
}

/// Client for the transaction-construction endpoint.
pub struct TradeClient {
    endpoint: String,
    client: reqwest::Client,
}

impl TradeClient {
    /// Create a client for the production endpoint.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_TRADE_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the trade endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Request an unsigned `create` transaction.
    ///
    /// Returns the raw response on success; the caller reads the binary body.
    /// A non-success status becomes a [`TradeError::Rejected`] carrying the
    /// numeric status and the body text.
    pub async fn request_create(
        &self,
        public_key: &str,
        mint: &str,
        metadata: &CreateTokenMetadata,
        options: &LaunchOptions,
    ) -> TradeResult<reqwest::Response> {
        let body = build_create_request(public_key, mint, metadata, options);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TradeError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| TradeError::Http(e.to_string()))?;
            return Err(TradeError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl Default for TradeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> CreateTokenMetadata {
        CreateTokenMetadata {
            name: "Test Token".into(),
            symbol: "TEST".into(),
            uri: "ipfs://QmTest".into(),
        }
    }

    #[test]
    fn request_body_applies_defaults() {
        let body = build_create_request("WalletPubkey", "MintPubkey", &metadata(), &LaunchOptions::default());

        assert_eq!(body["action"], "create");
        assert_eq!(body["pool"], "pump");
        assert_eq!(body["denominatedInSol"], "true");
        assert_eq!(body["mint"], "MintPubkey");
        assert_eq!(body["tokenMetadata"]["uri"], "ipfs://QmTest");
        assert_eq!(body["amount"], 0.0);
        assert_eq!(body["slippage"], 10);
        assert_eq!(body["priorityFee"], 0.0001);
    }

    #[test]
    fn request_body_honors_explicit_options() {
        let options = LaunchOptions {
            initial_buy_amount: Some(0.5),
            slippage_bps: Some(250),
            priority_fee: Some(0.002),
            ..Default::default()
        };
        let body = build_create_request("WalletPubkey", "MintPubkey", &metadata(), &options);

        assert_eq!(body["amount"], 0.5);
        assert_eq!(body["slippage"], 250);
        assert_eq!(body["priorityFee"], 0.002);
    }

    #[tokio::test]
    async fn non_success_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/trade-local")
            .with_status(400)
            .with_body("mint already exists")
            .create_async()
            .await;

        let client = TradeClient::new().with_endpoint(&format!("{}/api/trade-local", server.url()));
        let err = client
            .request_create("WalletPubkey", "MintPubkey", &metadata(), &LaunchOptions::default())
            .await
            .unwrap_err();

        match &err {
            TradeError::Rejected { status, body } => {
                assert_eq!(*status, 400);
                assert_eq!(body, "mint already exists");
            }
            other => panic!("expected TradeError::Rejected, got {other:?}"),
        }
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("mint already exists"));
    }

    #[tokio::test]
    async fn success_returns_raw_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/trade-local")
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body([1u8, 2, 3, 4].as_slice())
            .create_async()
            .await;

        let client = TradeClient::new().with_endpoint(&format!("{}/api/trade-local", server.url()));
        let response = client
            .request_create("WalletPubkey", "MintPubkey", &metadata(), &LaunchOptions::default())
            .await
            .unwrap();

        let bytes = response.bytes().await.unwrap();
        assert_eq!(bytes.as_ref(), &[1, 2, 3, 4]);
    }
}
