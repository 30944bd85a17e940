use std::error::Error;

use async_trait::async_trait;
use chain_eth::{FeeValues, FeeValuesType};

/// RPC-backed fee source for a single chain.
///
/// Implemented by the host on top of its JSON-RPC client. Values are in wei.
#[async_trait]
pub trait FeeEstimator: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    async fn estimate_fees_per_gas(
        &self,
        fee_type: FeeValuesType,
    ) -> Result<FeeValues<u128>, Self::Error>;
}
