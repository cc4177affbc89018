//! Address and coin-type validation.
//!
//! Two independent, stateless checks:
//!
//! - [`validate_address`] - pure format check for Sui addresses
//! - [`validate_coin_type`] - remote metadata lookup via the shared RPC client
//!
//! Both collapse every failure cause into one generic [`ValidationError`]
//! message per check; the coin-type validator keeps the underlying RPC failure
//! as the error source so it can still be logged.

use once_cell::sync::Lazy;

use crate::error::{ValidationError, ValidationResult};
use crate::rpc::SuiRpcClient;

/// Total length of a canonical Sui address, `0x` prefix included.
const ADDRESS_LEN: usize = 66;

/// Shared RPC handle, constructed on first use from the environment.
static RPC_CLIENT: Lazy<SuiRpcClient> = Lazy::new(SuiRpcClient::from_env);

/// Check that `address` is a canonical Sui address.
///
/// A valid address starts with `0x` and is exactly 66 characters long. The
/// check is purely syntactic and has no side effects.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    if !address.starts_with("0x") || address.chars().count() != ADDRESS_LEN {
        return Err(ValidationError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

/// Check that `coin_type` names a coin known to the configured Sui node.
///
/// A lookup failure of any kind (network, RPC error, malformed type) and an
/// absent metadata object both map to the same generic error.
pub async fn validate_coin_type(coin_type: &str) -> ValidationResult<()> {
    validate_coin_type_with(&RPC_CLIENT, coin_type).await
}

// Internal variant taking the client, making it testable with mockito.
pub(crate) async fn validate_coin_type_with(
    client: &SuiRpcClient,
    coin_type: &str,
) -> ValidationResult<()> {
    match client.coin_metadata(coin_type).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ValidationError::invalid_coin_type(coin_type, None)),
        Err(e) => Err(ValidationError::invalid_coin_type(coin_type, Some(e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ADDRESS: &str =
        "0x0000000000000000000000000000000000000000000000000000000000000002";

    #[test]
    fn accepts_canonical_address() {
        assert!(validate_address(VALID_ADDRESS).is_ok());
    }

    #[test]
    fn accepts_same_address_twice() {
        // No state anywhere: the second call must behave like the first.
        assert!(validate_address(VALID_ADDRESS).is_ok());
        assert!(validate_address(VALID_ADDRESS).is_ok());
    }

    #[test]
    fn rejects_missing_prefix() {
        let address = "1x0000000000000000000000000000000000000000000000000000000000000002";
        let err = validate_address(address).unwrap_err();
        assert!(err.to_string().contains(address));
    }

    #[test]
    fn rejects_wrong_length() {
        let too_short = "0x1234";
        let err = validate_address(too_short).unwrap_err();
        assert!(err.to_string().contains(too_short));

        let too_long = format!("{VALID_ADDRESS}00");
        assert!(validate_address(&too_long).is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(validate_address("").is_err());
    }

    #[tokio::test]
    async fn coin_type_valid_when_metadata_present() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": {
                        "decimals": 6,
                        "name": "USD Coin",
                        "symbol": "USDC",
                        "description": ""
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let result = validate_coin_type_with(&client, "0xa1ec::usdc::USDC").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn coin_type_invalid_when_lookup_returns_null() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":null}"#)
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let err = validate_coin_type_with(&client, "0xdead::fake::FAKE")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "0xdead::fake::FAKE is not a valid coin type");
    }

    #[tokio::test]
    async fn coin_type_invalid_when_lookup_fails() {
        use std::error::Error;

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid struct type"}}"#,
            )
            .create_async()
            .await;

        let client = SuiRpcClient::new(server.url());
        let err = validate_coin_type_with(&client, "not-a-type").await.unwrap_err();

        // Same generic message as the null case, cause kept as source.
        assert_eq!(err.to_string(), "not-a-type is not a valid coin type");
        assert!(err.source().is_some());
    }
}
