//! Typed actions run against a [`Config`](crate::config::Config).

pub mod estimate_fees_per_gas;

pub use estimate_fees_per_gas::{
    estimate_fees_per_gas, EstimateFeesPerGasParameters, EstimateFeesPerGasReturnType,
};
