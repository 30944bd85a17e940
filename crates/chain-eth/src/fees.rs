use std::fmt;

use serde::Serialize;

/// Fee model requested from an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeValuesType {
    /// Pre-London `gasPrice` only.
    Legacy,
    /// EIP-1559 `maxFeePerGas` / `maxPriorityFeePerGas`.
    #[default]
    Eip1559,
}

impl fmt::Display for FeeValuesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeValuesType::Legacy => f.write_str("legacy"),
            FeeValuesType::Eip1559 => f.write_str("eip1559"),
        }
    }
}

/// Per-gas fee values.
///
/// Legacy estimates fill `gas_price`; EIP-1559 estimates fill the two
/// `max_*` fields. `T` is `u128` for wei amounts and `String` once formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeValues<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<T>,
}

impl<T> Default for FeeValues<T> {
    fn default() -> Self {
        Self {
            gas_price: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        }
    }
}

impl<T> FeeValues<T> {
    /// Legacy fee values.
    pub fn legacy(gas_price: T) -> Self {
        Self {
            gas_price: Some(gas_price),
            ..Self::default()
        }
    }

    /// EIP-1559 fee values.
    pub fn eip1559(max_fee_per_gas: T, max_priority_fee_per_gas: T) -> Self {
        Self {
            max_fee_per_gas: Some(max_fee_per_gas),
            max_priority_fee_per_gas: Some(max_priority_fee_per_gas),
            ..Self::default()
        }
    }
}
