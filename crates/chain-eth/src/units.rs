use alloy_primitives::U256;

use crate::error::EthError;

pub use alloy_primitives::utils::{Unit, UnitsError};

/// Formats a wei amount in the given unit.
///
/// The decimal shift is done by `alloy_primitives::utils::format_units`;
/// trailing fractional zeros are dropped so `1_000_000_000` wei in gwei
/// prints as `"1"` and `1_500_000_000` as `"1.5"`.
pub fn format_units(amount: u128, unit: Unit) -> Result<String, EthError> {
    let raw = alloy_primitives::utils::format_units(U256::from(amount), unit.get())?;
    Ok(trim_fraction(raw))
}

fn trim_fraction(raw: String) -> String {
    if !raw.contains('.') {
        return raw;
    }
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
