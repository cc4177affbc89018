//! Error types for the launchkit helpers.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`UploadError`] - Token metadata/image upload errors
//! - [`TradeError`] - Transaction-construction endpoint errors
//! - [`RpcError`] - Sui JSON-RPC client errors
//! - [`ValidationError`] - Address and coin-type validation errors
//! - [`LaunchError`] - Top-level launch pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Metadata Upload Errors
// =============================================================================

/// Errors from the token metadata uploader.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The token image could not be fetched from its URL.
    #[error("Failed to fetch token image: {0}")]
    ImageFetch(String),

    /// The upload endpoint answered with a non-success status.
    #[error("Metadata upload failed: {0}")]
    Rejected(String),

    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered 2xx but the body was unusable.
    #[error("Invalid upload response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Transaction Request Errors
// =============================================================================

/// Errors from the transaction-construction endpoint.
#[derive(Debug, Error)]
pub enum TradeError {
    /// Non-success status from the trade endpoint.
    #[error("Transaction request failed with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(String),
}

// =============================================================================
// RPC Client Errors
// =============================================================================

/// Errors from the Sui JSON-RPC client.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Transport-level failure or non-success HTTP status.
    #[error("RPC transport error: {0}")]
    Http(String),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response body did not match the JSON-RPC shape.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors from the address and coin-type validators.
///
/// Both validators collapse distinct root causes into one generic message
/// each. For coin types the underlying [`RpcError`] is kept as the error
/// source so callers that walk the chain can still recover it.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The address is not a 66-character `0x`-prefixed string.
    #[error("Invalid Sui address: {0}")]
    InvalidAddress(String),

    /// The coin type was rejected by the remote metadata lookup.
    #[error("{coin_type} is not a valid coin type")]
    InvalidCoinType {
        coin_type: String,
        #[source]
        source: Option<RpcError>,
    },
}

impl ValidationError {
    /// Build an `InvalidCoinType` error, keeping the lookup failure (if any)
    /// as the source.
    pub fn invalid_coin_type(coin_type: impl Into<String>, source: Option<RpcError>) -> Self {
        ValidationError::InvalidCoinType {
            coin_type: coin_type.into(),
            source,
        }
    }
}

// =============================================================================
// Launch Errors (top-level)
// =============================================================================

/// Top-level errors for the token launch pipeline.
///
/// This is the main error type returned by [`crate::launch::launch_token`].
/// It wraps the step errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Metadata upload step failed.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Transaction request step failed.
    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),

    /// The trade endpoint body was not a versioned transaction.
    #[error("Failed to deserialize transaction: {0}")]
    Deserialize(String),

    /// The returned transaction does not list the mint key as a signer.
    #[error("Mint public key {0} is not a required signer of the returned transaction")]
    MissingSigner(String),
}

impl LaunchError {
    /// Extract on-chain simulation logs from a trade error body, if present.
    ///
    /// The trade endpoint embeds a `logs` string array in its JSON error body
    /// when transaction simulation fails. These are purely diagnostic.
    pub fn simulation_logs(&self) -> Option<Vec<String>> {
        let LaunchError::Trade(TradeError::Rejected { body, .. }) = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let logs = value.get("logs")?.as_array()?;
        Some(
            logs.iter()
                .filter_map(|l| l.as_str().map(str::to_string))
                .collect(),
        )
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for metadata upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for trade endpoint operations.
pub type TradeResult<T> = Result<T, TradeError>;

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for the launch pipeline.
pub type LaunchResult<T> = Result<T, LaunchError>;
