//! Ethereum/EVM value types shared by the action layer.
//!
//! This crate provides:
//! - Fee value shapes returned by fee estimation (legacy and EIP-1559)
//! - Display units for wei amounts and a formatter backed by `alloy-primitives`

pub mod error;
pub mod fees;
pub mod units;

pub use error::EthError;
pub use fees::{FeeValues, FeeValuesType};
pub use units::Unit;
