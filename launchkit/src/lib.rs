//! # Launchkit - pump.fun token launches and Sui validators
//!
//! Launchkit wraps the two HTTP endpoints behind a pump.fun token launch and
//! co-signs the resulting transaction locally, plus two small validators for
//! Sui addresses and coin types.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TokenInfo  │────▶│   Upload    │────▶│    Trade    │────▶│  Co-signed  │
//! │  + options  │     │ (IPFS meta) │     │ (create tx) │     │  base64 tx  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
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
//!     let tx = launch_token("WalletPubkey...", &token, &LaunchOptions::default())
//!         .await
//!         .unwrap();
//!     println!("{tx}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`launch`] - Token launch pipeline (upload, trade, co-sign)
//! - [`rpc`] - Sui JSON-RPC client
//! - [`validation`] - Address and coin-type validators

// Core modules
pub mod error;

// Token launch
pub mod launch;

// Sui RPC
pub mod rpc;

// Validation
pub mod validation;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    LaunchError,
    RpcError,
    TradeError,
    UploadError,
    ValidationError,
};

// =============================================================================
// Re-exports - Launch
// =============================================================================

pub use launch::{
    launch_token,
    launch_token_with_mint,
    LaunchOptions,
    TokenInfo,
};

pub use launch::metadata::MetadataUploader;
pub use launch::trade::{CreateTokenMetadata, TradeClient};

// =============================================================================
// Re-exports - RPC
// =============================================================================

pub use rpc::{CoinMetadata, SuiRpcClient};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{validate_address, validate_coin_type};
