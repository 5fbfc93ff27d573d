//! Parsing of Cash Account registrations.
//!
//! A registration is an `OP_RETURN` output script of the form:
//!
//! ```text
//! [0..6]   prefix 6a 04 01010101
//! push     account name
//! push*    payloads, each a type byte followed by payment data
//! ```
//!
//! Parsing first splits the body into pushed parts, then interprets the
//! first part as the name and the rest as payloads.

use bitcoin::{Script, Transaction};
use tracing::*;

use crate::account::Account;
use crate::error::{CashAcctError, CashAcctResult};
use crate::name::{AccountName, check_name};
use crate::payload::{Payload, classify};
use crate::prefix::{PREFIX_LEN, check_prefix};
use crate::pushdata::scan_parts;

/// Minimum number of parts, a name and one payload.
const MIN_PARTS: usize = 2;

/// Parses a Cash Account registration from an `OP_RETURN` script into a
/// caller-provided record.
///
/// Returns the number of payloads of a known type.  Payload data is only
/// copied into `account` if `store_payloads` is set, but the count is the
/// same either way.  Payloads with unknown types are skipped.
///
/// `account` is left alone if the script is rejected before the name has
/// been validated.  After that it is cleared and refilled, and on a later
/// failure keeps the name and any payloads stored so far.
pub fn parse_opreturn(
    script: &[u8],
    store_payloads: bool,
    account: &mut Account,
) -> CashAcctResult<usize> {
    if !check_prefix(script) {
        return Err(CashAcctError::WrongPrefix);
    }

    let parts = scan_parts(script, PREFIX_LEN)?;
    if parts.len() < MIN_PARTS {
        return Err(CashAcctError::TooFewParts(parts.len()));
    }

    let name = parts[0].slice(script);
    if !check_name(name) {
        return Err(CashAcctError::InvalidAccountName);
    }

    account.clear();
    let name =
        AccountName::try_copy_validated(name).map_err(|_| CashAcctError::AllocationFailed)?;
    account.set_name(name);

    let mut found = 0;
    for part in &parts[1..] {
        let Some((ty, data)) = classify(part.slice(script)) else {
            // Unknown types are reserved for future use.
            continue;
        };

        found += 1;
        if !store_payloads {
            continue;
        }

        let payload =
            Payload::try_copy(ty, data).map_err(|_| CashAcctError::AllocationFailed)?;
        let payloads = account.payloads_mut();
        payloads
            .try_reserve(1)
            .map_err(|_| CashAcctError::AllocationFailed)?;
        payloads.push(payload);
    }

    Ok(found)
}

/// Config for parsing registrations.
#[derive(Clone, Debug)]
pub struct ParseConfig {
    store_payloads: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ParseConfig {
    /// Constructs a new instance.
    pub fn new(store_payloads: bool) -> Self {
        Self { store_payloads }
    }

    /// Sets whether payload data is copied out.  Without it parsing only
    /// yields the name and the payload count, which is cheaper.
    pub fn with_store_payloads(mut self, store_payloads: bool) -> Self {
        self.store_payloads = store_payloads;
        self
    }

    /// Gets whether payload data is copied out.
    pub fn store_payloads(&self) -> bool {
        self.store_payloads
    }

    /// Parses a registration into an existing record, see [`parse_opreturn`].
    pub fn parse_into(&self, buf: &[u8], account: &mut Account) -> CashAcctResult<usize> {
        parse_opreturn(buf, self.store_payloads, account)
    }

    /// Attempts to parse a registration from raw `OP_RETURN` script bytes.
    ///
    /// Returns the payload count along with the record.
    pub fn try_parse_buf(&self, buf: &[u8]) -> CashAcctResult<(usize, Account)> {
        let mut account = Account::new();
        let found = self.parse_into(buf, &mut account)?;
        Ok((found, account))
    }

    /// Attempts to parse a registration from an output script.
    pub fn try_parse_script(&self, script: &Script) -> CashAcctResult<(usize, Account)> {
        self.try_parse_buf(script.as_bytes())
    }

    /// Attempts to parse the registration carried by a transaction.
    ///
    /// The first output with the Cash Account prefix is taken as the
    /// registration, later outputs are not looked at.
    pub fn try_parse_tx(&self, tx: &Transaction) -> CashAcctResult<(usize, Account)> {
        let txid = tx.compute_txid();

        for (vout, out) in tx.output.iter().enumerate() {
            let script = out.script_pubkey.as_bytes();
            if !check_prefix(script) {
                trace!(%txid, %vout, "skipping output without cash account prefix");
                continue;
            }

            return self.try_parse_buf(script).inspect_err(|err| {
                debug!(%txid, %vout, %err, "malformed cash account registration");
            });
        }

        Err(CashAcctError::NoRegistrationOutput)
    }
}
