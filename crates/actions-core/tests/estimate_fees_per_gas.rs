//! End-to-end tests for the fee estimation action:
//! config -> client lookup -> estimator -> formatted result.

use actions_core::*;
use async_trait::async_trait;
use chain_eth::{FeeValues, FeeValuesType, Unit};

#[derive(Debug, thiserror::Error)]
#[error("rpc request failed: {0}")]
struct RpcFailure(String);

/// Answers like a node on a London-enabled chain.
#[derive(Debug)]
struct MockNode {
    base_fee: u128,
    priority_fee: u128,
}

#[async_trait]
impl FeeEstimator for MockNode {
    type Error = RpcFailure;

    async fn estimate_fees_per_gas(
        &self,
        fee_type: FeeValuesType,
    ) -> Result<FeeValues<u128>, RpcFailure> {
        Ok(match fee_type {
            FeeValuesType::Legacy => FeeValues::legacy(self.base_fee + self.priority_fee),
            FeeValuesType::Eip1559 => {
                FeeValues::eip1559(self.base_fee * 2 + self.priority_fee, self.priority_fee)
            }
        })
    }
}

#[derive(Debug)]
struct DownNode;

#[async_trait]
impl FeeEstimator for DownNode {
    type Error = RpcFailure;

    async fn estimate_fees_per_gas(
        &self,
        _fee_type: FeeValuesType,
    ) -> Result<FeeValues<u128>, RpcFailure> {
        Err(RpcFailure("connection refused".into()))
    }
}

fn mainnet_config() -> StaticConfig<MockNode> {
    StaticConfig::new()
        .with_client(
            1,
            MockNode {
                base_fee: 20_000_000_000,   // 20 gwei
                priority_fee: 1_500_000_000, // 1.5 gwei
            },
        )
        .with_client(
            10,
            MockNode {
                base_fee: 1_000_000,
                priority_fee: 0,
            },
        )
}

// ─── Success paths ──────────────────────────────────────────────────

#[tokio::test]
async fn eip1559_in_gwei_by_default() {
    let result = estimate_fees_per_gas(&mainnet_config(), Default::default())
        .await
        .unwrap();

    assert_eq!(result.gas_price, None);
    assert_eq!(result.max_fee_per_gas, Some(41_500_000_000));
    assert_eq!(result.max_priority_fee_per_gas, Some(1_500_000_000));
    assert_eq!(result.formatted.max_fee_per_gas.as_deref(), Some("41.5"));
    assert_eq!(result.formatted.max_priority_fee_per_gas.as_deref(), Some("1.5"));
    assert_eq!(result.formatted.gas_price, None);
}

#[tokio::test]
async fn legacy_on_selected_chain() {
    let params = EstimateFeesPerGasParameters {
        chain_id: Some(1),
        fee_type: FeeValuesType::Legacy,
        ..Default::default()
    };
    let result = estimate_fees_per_gas(&mainnet_config(), params).await.unwrap();

    assert_eq!(result.gas_price, Some(21_500_000_000));
    assert_eq!(result.formatted.gas_price.as_deref(), Some("21.5"));
    assert!(result.max_fee_per_gas.is_none());
}

#[tokio::test]
async fn custom_unit_and_zero_priority_fee() {
    let params = EstimateFeesPerGasParameters {
        chain_id: Some(10),
        format_units: Unit::WEI,
        ..Default::default()
    };
    let result = estimate_fees_per_gas(&mainnet_config(), params).await.unwrap();

    assert_eq!(result.max_priority_fee_per_gas, Some(0));
    assert_eq!(result.formatted.max_fee_per_gas.as_deref(), Some("2000000"));
    assert_eq!(result.formatted.max_priority_fee_per_gas, None);
}

#[tokio::test]
async fn result_serializes_for_ui_layer() {
    let result = estimate_fees_per_gas(&mainnet_config(), Default::default())
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "maxFeePerGas": 41_500_000_000u64,
            "maxPriorityFeePerGas": 1_500_000_000u64,
            "formatted": {
                "maxFeePerGas": "41.5",
                "maxPriorityFeePerGas": "1.5"
            }
        })
    );
}

// ─── Failure paths ──────────────────────────────────────────────────

#[tokio::test]
async fn unknown_chain_fails_with_chain_not_configured() {
    let params = EstimateFeesPerGasParameters {
        chain_id: Some(137),
        ..Default::default()
    };
    let err = estimate_fees_per_gas(&mainnet_config(), params)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ChainNotConfigured);
    assert_eq!(err.name(), "ChainNotConfiguredError");
    assert!(err.to_string().contains("Chain ID: 137"));
}

#[tokio::test]
async fn estimator_failure_is_wrapped_with_cause() {
    let config = StaticConfig::new().with_client(1, DownNode);
    let err = estimate_fees_per_gas(&config, Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FeeEstimation);
    assert_eq!(
        err.resolved_details(),
        Some("rpc request failed: connection refused")
    );
    assert!(err.walk().downcast_ref::<RpcFailure>().is_some());
    assert!(err
        .message()
        .contains("Docs: https://evm-actions.dev/core/api/actions/estimateFeesPerGas.html"));
}

#[tokio::test]
async fn host_wrapper_finds_fee_estimation_failure() {
    let config = StaticConfig::new().with_client(1, DownNode);
    let err = estimate_fees_per_gas(&config, Default::default())
        .await
        .unwrap_err();

    // A host layer wraps the action error in its own variant.
    let hook_err = BaseError::with_kind(
        ErrorKind::Custom("QueryError"),
        "Fee query failed.",
        BaseErrorOptions::default().with_cause(err),
    );

    let found = hook_err.find_kind(ErrorKind::FeeEstimation).unwrap();
    assert_eq!(found.short_message(), "Failed to estimate fees per gas.");
    assert_eq!(
        hook_err.resolved_details(),
        Some("rpc request failed: connection refused")
    );
    assert_eq!(hook_err.docs_url(), found.docs_url());
}
