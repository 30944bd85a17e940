//! # actions-core
//!
//! Typed EVM actions and the structured error type they return.
//!
//! - [`error::BaseError`]: rendered error messages with a cause chain and
//!   docs/details inheritance
//! - [`walk`]: cause-chain traversal
//! - [`config::Config`] / [`client::FeeEstimator`]: seams to the host's RPC clients
//! - [`actions`]: fee estimation

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod walk;

pub use actions::{
    estimate_fees_per_gas, EstimateFeesPerGasParameters, EstimateFeesPerGasReturnType,
};
pub use client::FeeEstimator;
pub use config::{Config, StaticConfig};
pub use error::{BaseError, BaseErrorOptions, Cause, ErrorKind};
