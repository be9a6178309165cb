use thiserror::Error;

/// Instruction encoding errors.
///
/// Both variants are local, synchronous validation failures raised at the
/// encoding boundary. Nothing is retried or silently corrected here; retry
/// policy belongs to whoever submits the resulting transaction.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = EncodeError::InvalidAddress("expected 32 bytes, got 31".into());
        assert_eq!(
            err.to_string(),
            "invalid address: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn display_invalid_amount() {
        let err = EncodeError::InvalidAmount("amount is negative".into());
        assert_eq!(err.to_string(), "invalid amount: amount is negative");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(EncodeError::InvalidAmount("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
