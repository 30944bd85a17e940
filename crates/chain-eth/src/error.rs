use alloy_primitives::utils::UnitsError;
use thiserror::Error;

/// Ethereum value errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("unit formatting error: {0}")]
    UnitFormat(#[from] UnitsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unit_format_wraps_alloy_error() {
        let err = EthError::from(UnitsError::InvalidUnit("99".into()));
        assert!(err.to_string().starts_with("unit formatting error: "));
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(EthError::from(UnitsError::InvalidUnit("test".into())));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn debug_format_works() {
        let err = EthError::from(UnitsError::InvalidUnit("x".into()));
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnitFormat"));
    }
}
