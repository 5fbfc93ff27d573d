use thiserror::Error;

/// Errors from parsing a Cash Account registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashAcctError {
    /// The account name part is empty, too long, or has characters outside
    /// `[A-Za-z0-9_]`.
    #[error("invalid account name")]
    InvalidAccountName,

    /// Could not grow storage for the name or a payload.
    #[error("allocation failed")]
    AllocationFailed,

    /// The script ended in the middle of a PUSHDATA length field.
    #[error("pushdata truncated at offset {at}")]
    PushDataTruncated {
        /// Offset of the opcode whose length field was cut off.
        at: usize,
    },

    /// A push claimed more bytes than are left in the script.
    #[error("push at offset {at} claims {len} bytes, only {remaining} remain")]
    PushDataExceedsBuffer {
        /// Offset where the pushed data starts.
        at: usize,
        /// Decoded push length.
        len: usize,
        /// Bytes actually left after the length field.
        remaining: usize,
    },

    /// Found an opcode that is not a data push.
    #[error("expected pushdata, found opcode {opcode:#04x} at offset {at}")]
    NoPushDataOperator {
        /// The offending opcode byte.
        opcode: u8,
        /// Its offset in the script.
        at: usize,
    },

    /// Registration needs a name and at least one payload part.
    #[error("too few parts in registration (found {0})")]
    TooFewParts(usize),

    /// Script does not start with the Cash Account protocol prefix.
    #[error("script missing cash account prefix")]
    WrongPrefix,

    /// No output of the transaction carries a Cash Account prefix.
    #[error("tx has no cash account output")]
    NoRegistrationOutput,
}

impl CashAcctError {
    /// Returns the integer error code used by the reference C library
    /// (`libcashaccount`), for callers that still speak that ABI.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidAccountName => -1,
            Self::AllocationFailed => -2,
            Self::PushDataTruncated { .. } | Self::PushDataExceedsBuffer { .. } => -3,
            Self::NoPushDataOperator { .. } => -4,
            Self::TooFewParts(_) => -5,
            Self::WrongPrefix | Self::NoRegistrationOutput => -6,
        }
    }
}

/// Wrapper result type.
pub type CashAcctResult<T> = Result<T, CashAcctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_codes() {
        assert_eq!(CashAcctError::InvalidAccountName.code(), -1);
        assert_eq!(CashAcctError::AllocationFailed.code(), -2);
        assert_eq!(CashAcctError::PushDataTruncated { at: 7 }.code(), -3);
        let exceeds = CashAcctError::PushDataExceedsBuffer {
            at: 8,
            len: 30,
            remaining: 2,
        };
        assert_eq!(exceeds.code(), -3);
        let no_push = CashAcctError::NoPushDataOperator { opcode: 0x76, at: 6 };
        assert_eq!(no_push.code(), -4);
        assert_eq!(CashAcctError::TooFewParts(1).code(), -5);
        assert_eq!(CashAcctError::WrongPrefix.code(), -6);
    }

    #[test]
    fn test_display() {
        let err = CashAcctError::NoPushDataOperator { opcode: 0x76, at: 6 };
        assert_eq!(
            err.to_string(),
            "expected pushdata, found opcode 0x76 at offset 6"
        );
    }
}
