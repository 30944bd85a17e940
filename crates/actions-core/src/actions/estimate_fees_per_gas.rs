use chain_eth::units::{self, Unit};
use chain_eth::{FeeValues, FeeValuesType};
use serde::Serialize;
use tracing::debug;

use crate::client::FeeEstimator;
use crate::config::Config;
use crate::error::BaseError;

/// Inputs to [`estimate_fees_per_gas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateFeesPerGasParameters {
    /// Chain to estimate on; the config's default chain when `None`.
    pub chain_id: Option<u64>,
    pub fee_type: FeeValuesType,
    /// Unit for the `formatted` values (gwei by default).
    pub format_units: Unit,
}

impl Default for EstimateFeesPerGasParameters {
    fn default() -> Self {
        Self {
            chain_id: None,
            fee_type: FeeValuesType::default(),
            format_units: Unit::GWEI,
        }
    }
}

/// Estimated fees in wei plus their formatted counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateFeesPerGasReturnType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u128>,
    pub formatted: FeeValues<String>,
}

/// Estimates per-gas fees on the selected chain.
///
/// The RPC call and the unit math are delegated to the chain's
/// [`FeeEstimator`] and `chain_eth::units`. Zero values are left out of
/// `formatted`.
pub async fn estimate_fees_per_gas<C: Config>(
    config: &C,
    parameters: EstimateFeesPerGasParameters,
) -> Result<EstimateFeesPerGasReturnType, BaseError> {
    let EstimateFeesPerGasParameters {
        chain_id,
        fee_type,
        format_units: unit,
    } = parameters;
    debug!(?chain_id, %fee_type, decimals = unit.get(), "estimating fees per gas");

    let client = config.get_client(chain_id)?;
    let fees = client
        .estimate_fees_per_gas(fee_type)
        .await
        .map_err(BaseError::fee_estimation)?;

    let formatted = FeeValues {
        gas_price: format_fee(fees.gas_price, unit)?,
        max_fee_per_gas: format_fee(fees.max_fee_per_gas, unit)?,
        max_priority_fee_per_gas: format_fee(fees.max_priority_fee_per_gas, unit)?,
    };
    debug!(
        gas_price = ?fees.gas_price,
        max_fee_per_gas = ?fees.max_fee_per_gas,
        max_priority_fee_per_gas = ?fees.max_priority_fee_per_gas,
        "estimated fees per gas"
    );

    Ok(EstimateFeesPerGasReturnType {
        gas_price: fees.gas_price,
        max_fee_per_gas: fees.max_fee_per_gas,
        max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
        formatted,
    })
}

fn format_fee(value: Option<u128>, unit: Unit) -> Result<Option<String>, BaseError> {
    value
        .filter(|wei| *wei != 0)
        .map(|wei| units::format_units(wei, unit))
        .transpose()
        .map_err(BaseError::unit_format)
}
