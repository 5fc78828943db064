//! SDK error types.
//!
//! Every error here is a local contract violation: nothing in this crate
//! performs I/O, so no variant is transient or worth retrying.

/// SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Arguments or accounts do not fit the instruction's fixed schema.
    #[error("schema mismatch for {kind}: {detail}")]
    SchemaMismatch {
        /// Instruction kind name.
        kind: &'static str,
        /// What did not match.
        detail: String,
    },

    /// A numeric value does not fit the fixed width of its field.
    #[error("value {value} for field `{field}` does not fit in {width} byte(s)")]
    EncodingRange {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: u128,
        /// Field width in bytes.
        width: usize,
    },

    /// A required named account was not supplied.
    #[error("missing account `{slot}` for {kind}")]
    MissingAccount {
        /// Instruction kind name.
        kind: &'static str,
        /// Slot name.
        slot: &'static str,
    },

    /// Invalid address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_account() {
        let err = SdkError::MissingAccount {
            kind: "Sell",
            slot: "auction_house_fee_account",
        };
        assert_eq!(
            err.to_string(),
            "missing account `auction_house_fee_account` for Sell"
        );
    }

    #[test]
    fn test_error_display_encoding_range() {
        let err = SdkError::EncodingRange {
            field: "trade_state_bump",
            value: 256,
            width: 1,
        };
        assert_eq!(
            err.to_string(),
            "value 256 for field `trade_state_bump` does not fit in 1 byte(s)"
        );
    }

    #[test]
    fn test_error_display_schema_mismatch() {
        let err = SdkError::SchemaMismatch {
            kind: "PublicBuy",
            detail: "unexpected field `foo`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch for PublicBuy: unexpected field `foo`"
        );
    }
}
