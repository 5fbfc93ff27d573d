//! This crate contains the types and logic for parsing Cash Account v1.0
//! registrations out of `OP_RETURN` output scripts.
//!
//! See [`parse_opreturn`] for the core entry point and [`ParseConfig`] for
//! parsing from scripts and transactions.

#[cfg(feature = "arbitrary")]
mod arbitrary;
mod account;
mod cursor;
mod error;
mod name;
mod parse;
mod payload;
mod prefix;
mod pushdata;
#[cfg(feature = "serde")]
mod serde;

// Only exercised by the serde feature's tests.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

pub use account::Account;
pub use error::{CashAcctError, CashAcctResult};
pub use name::{AccountName, InvalidName, MAX_NAME_LEN, MIN_NAME_LEN, check_name};
pub use parse::{ParseConfig, parse_opreturn};
pub use payload::{Payload, PayloadType, UnknownPayloadType, check_payload_type};
pub use prefix::{CASHACCT_PREFIX, PREFIX_LEN, PROTOCOL_ID, PROTOCOL_ID_LEN, check_prefix};
