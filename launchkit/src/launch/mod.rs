//! Token launch pipeline for pump.fun.
//!
//! This module sequences the three external calls behind a token launch:
//! metadata/image upload, unsigned transaction construction, and local
//! co-signing with a freshly generated mint keypair.
//!
//! # Example
//!
//! ```rust,ignore
//! use launchkit::{launch_token, LaunchOptions, TokenInfo};
//!
//! #[tokio::main]
//! async fn main() {
//!     let token = TokenInfo {
//!         name: "My Token".into(),
//!         ticker: "MTK".into(),
//!         description: "a token".into(),
//!         image_url: "https://example.com/token.png".into(),
//!     };
//!     let encoded = launch_token("WalletPubkey...", &token, &LaunchOptions::default())
//!         .await
//!         .unwrap();
//!     println!("signed transaction: {encoded}");
//! }
//! ```

pub mod metadata;
pub mod trade;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::VersionedTransaction;
use tracing::error;

use crate::error::{LaunchError, LaunchResult, TradeError, UploadError};
use metadata::MetadataUploader;
use trade::{CreateTokenMetadata, TradeClient};

/// Required token fields for a launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Display name of the token.
    pub name: String,

    /// Ticker symbol.
    pub ticker: String,

    /// Free-form description shown on the token page.
    pub description: String,

    /// URL the token image is fetched from.
    pub image_url: String,
}

/// Optional fields for a launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Twitter / X handle or link.
    pub twitter: Option<String>,

    /// Telegram link.
    pub telegram: Option<String>,

    /// Project website.
    pub website: Option<String>,

    /// Initial developer buy in SOL (default 0: create only).
    pub initial_buy_amount: Option<f64>,

    /// Slippage tolerance in basis points (default 10).
    pub slippage_bps: Option<u64>,

    /// Priority fee in SOL (default 0.0001).
    pub priority_fee: Option<f64>,
}

/// Launch a new pump.fun token.
///
/// Generates an ephemeral mint keypair, uploads metadata, requests the
/// unsigned create transaction, co-signs it with the mint key and returns
/// the signed transaction as base64 text. The keypair is dropped when this
/// function returns; the mint address can be recovered from the transaction.
///
/// The returned transaction still needs the wallet's own signature before it
/// can be submitted.
pub async fn launch_token(
    wallet: &str,
    token: &TokenInfo,
    options: &LaunchOptions,
) -> LaunchResult<String> {
    let mint = Keypair::new();
    launch_token_with_mint(wallet, token, options, &mint).await
}

/// Launch a token using a caller-provided mint keypair.
///
/// Same pipeline as [`launch_token`] for callers that need a specific mint
/// address (vanity mints, pre-derived keys).
pub async fn launch_token_with_mint(
    wallet: &str,
    token: &TokenInfo,
    options: &LaunchOptions,
    mint: &Keypair,
) -> LaunchResult<String> {
    let uploader = MetadataUploader::new();
    let trade = TradeClient::new();

    match run_launch(&uploader, &trade, wallet, token, options, mint).await {
        Ok(encoded) => Ok(encoded),
        Err(err) => {
            error!("token launch failed: {err}");
            if let Some(logs) = err.simulation_logs() {
                error!("simulation logs:\n{}", logs.join("\n"));
            }
            Err(err)
        }
    }
}

// Internal pipeline taking the clients, making it testable with mockito.
pub(crate) async fn run_launch(
    uploader: &MetadataUploader,
    trade: &TradeClient,
    wallet: &str,
    token: &TokenInfo,
    options: &LaunchOptions,
    mint: &Keypair,
) -> LaunchResult<String> {
    // 1. Upload metadata + image
    let upload = uploader.upload(token, options).await?;
    let token_metadata = extract_metadata(&upload)?;

    // 2. Request the unsigned create transaction
    let response = trade
        .request_create(wallet, &mint.pubkey().to_string(), &token_metadata, options)
        .await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| TradeError::Http(e.to_string()))?;

    // 3. Deserialize, add the mint signature, re-serialize
    let mut tx: VersionedTransaction =
        bincode::deserialize(&bytes).map_err(|e| LaunchError::Deserialize(e.to_string()))?;
    sign_with_mint(&mut tx, mint)?;
    let signed = bincode::serialize(&tx).map_err(|e| LaunchError::Deserialize(e.to_string()))?;

    // 4. Encode for transport
    Ok(BASE64.encode(signed))
}

/// Pull the required fields out of the upload response.
///
/// The upload endpoint is not under our control, so the fields the trade
/// request needs are checked for presence here instead of trusting the body.
fn extract_metadata(upload: &Value) -> Result<CreateTokenMetadata, UploadError> {
    let field = |pointer: &str| {
        upload
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| UploadError::InvalidResponse(format!("missing field {pointer}")))
    };

    Ok(CreateTokenMetadata {
        name: field("/metadata/name")?,
        symbol: field("/metadata/symbol")?,
        uri: field("/metadataUri")?,
    })
}

/// Write the mint signature into its slot of the transaction.
///
/// The mint public key must be one of the message's required signers; its
/// signature is computed over the serialized message and stored at the
/// matching index. Existing signatures are left untouched and unverified.
fn sign_with_mint(tx: &mut VersionedTransaction, mint: &Keypair) -> LaunchResult<()> {
    let message_bytes = tx.message.serialize();
    let num_required = tx.message.header().num_required_signatures as usize;

    let position = tx
        .message
        .static_account_keys()
        .iter()
        .take(num_required)
        .position(|key| *key == mint.pubkey())
        .ok_or_else(|| LaunchError::MissingSigner(mint.pubkey().to_string()))?;

    // A well-formed transaction carries one placeholder per required signer,
    // but the endpoint's output is not trusted on that point.
    if tx.signatures.len() < num_required {
        tx.signatures.resize(num_required, Signature::default());
    }
    tx.signatures[position] = mint.sign_message(&message_bytes);

    Ok(())
}
