//! Cash Account protocol prefix.
//!
//! Every registration script starts with:
//!
//! ```text
//! [0]      OP_RETURN
//! [1]      OP_PUSHBYTES_4
//! [2..6]   protocol id 01 01 01 01
//! ```

use bitcoin::opcodes::all::{OP_PUSHBYTES_4, OP_RETURN};

/// Length of the protocol identifier pushed after `OP_RETURN`.
pub const PROTOCOL_ID_LEN: usize = 4;

/// Cash Account protocol identifier.
pub const PROTOCOL_ID: [u8; PROTOCOL_ID_LEN] = [0x01, 0x01, 0x01, 0x01];

/// Length of the full script prefix in bytes.
pub const PREFIX_LEN: usize = 2 + PROTOCOL_ID_LEN;

/// Script prefix every Cash Account registration starts with.
pub const CASHACCT_PREFIX: [u8; PREFIX_LEN] = [
    OP_RETURN.to_u8(),
    OP_PUSHBYTES_4.to_u8(),
    PROTOCOL_ID[0],
    PROTOCOL_ID[1],
    PROTOCOL_ID[2],
    PROTOCOL_ID[3],
];

/// Checks if a script starts with the Cash Account prefix.
///
/// Buffers shorter than [`PREFIX_LEN`] are simply not a match.
pub fn check_prefix(script: &[u8]) -> bool {
    script.starts_with(&CASHACCT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bytes() {
        assert_eq!(CASHACCT_PREFIX, [0x6a, 0x04, 0x01, 0x01, 0x01, 0x01]);
    }

    #[test]
    fn test_check_prefix() {
        assert!(check_prefix(&CASHACCT_PREFIX));
        assert!(check_prefix(&[0x6a, 0x04, 0x01, 0x01, 0x01, 0x01, 0x08]));
        assert!(!check_prefix(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]));
        assert!(!check_prefix(&[0x6a, 0x04, 0x01, 0x01, 0x01, 0x02]));
    }

    #[test]
    fn test_check_prefix_too_short() {
        assert!(!check_prefix(&[]));
        assert!(!check_prefix(&[0x00, 0x00]));
        assert!(!check_prefix(&CASHACCT_PREFIX[..PREFIX_LEN - 1]));
    }
}
