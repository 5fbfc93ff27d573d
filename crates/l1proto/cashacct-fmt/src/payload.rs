//! Payment payloads attached to a registration.
//!
//! Each payload part is a type byte followed by opaque payment data:
//!
//! ```text
//! [0]      payload type
//! [1..]    payment data
//! ```

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Byte that is not one of the known payload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown payload type {0:#04x}")]
pub struct UnknownPayloadType(pub u8);

/// Known payment payload types.
///
/// The high bit marks the token-aware variant of each base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PayloadType {
    /// Pay-to-pubkey-hash.
    KeyHash = 0x01,
    /// Pay-to-script-hash.
    ScriptHash = 0x02,
    /// BIP-47 payment code.
    PaymentCode = 0x03,
    /// Stealth address keys.
    StealthKeys = 0x04,
    /// Token-aware pay-to-pubkey-hash.
    TokenKeyHash = 0x81,
    /// Token-aware pay-to-script-hash.
    TokenScriptHash = 0x82,
    /// Token-aware payment code.
    TokenPaymentCode = 0x83,
    /// Token-aware stealth keys.
    TokenStealthKeys = 0x84,
}

impl PayloadType {
    /// All known types, in ascending byte order.
    pub const ALL: [PayloadType; 8] = [
        Self::KeyHash,
        Self::ScriptHash,
        Self::PaymentCode,
        Self::StealthKeys,
        Self::TokenKeyHash,
        Self::TokenScriptHash,
        Self::TokenPaymentCode,
        Self::TokenStealthKeys,
    ];

    /// Decodes a type byte, returning `None` if it's unknown.
    pub const fn from_u8(b: u8) -> Option<Self> {
        Some(match b {
            0x01 => Self::KeyHash,
            0x02 => Self::ScriptHash,
            0x03 => Self::PaymentCode,
            0x04 => Self::StealthKeys,
            0x81 => Self::TokenKeyHash,
            0x82 => Self::TokenScriptHash,
            0x83 => Self::TokenPaymentCode,
            0x84 => Self::TokenStealthKeys,
            _ => return None,
        })
    }

    /// Encodes as the type byte.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns if this is one of the token-aware types.
    pub const fn is_token_aware(self) -> bool {
        self.to_u8() & 0x80 != 0
    }

    fn label(self) -> &'static str {
        match self {
            Self::KeyHash => "key-hash",
            Self::ScriptHash => "script-hash",
            Self::PaymentCode => "payment-code",
            Self::StealthKeys => "stealth-keys",
            Self::TokenKeyHash => "token-key-hash",
            Self::TokenScriptHash => "token-script-hash",
            Self::TokenPaymentCode => "token-payment-code",
            Self::TokenStealthKeys => "token-stealth-keys",
        }
    }
}

impl TryFrom<u8> for PayloadType {
    type Error = UnknownPayloadType;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Self::from_u8(b).ok_or(UnknownPayloadType(b))
    }
}

impl From<PayloadType> for u8 {
    fn from(ty: PayloadType) -> Self {
        ty.to_u8()
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks if a payload type byte is known.  Payloads of unknown types are
/// ignored when parsing.
pub fn check_payload_type(b: u8) -> bool {
    PayloadType::from_u8(b).is_some()
}

/// A single payment payload from a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payload {
    /// The payment type.
    ty: PayloadType,

    /// Payment data, without the type byte.
    data: Vec<u8>,
}

impl Payload {
    /// Constructs a new instance.
    pub fn new(ty: PayloadType, data: Vec<u8>) -> Self {
        Self { ty, data }
    }

    /// Gets the payment type.
    pub fn ty(&self) -> PayloadType {
        self.ty
    }

    /// Gets the payment data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Converts into the type and data.
    pub fn into_parts(self) -> (PayloadType, Vec<u8>) {
        (self.ty, self.data)
    }

    /// Copies payment data out of a part, reporting allocation failure
    /// instead of aborting.
    pub(crate) fn try_copy(ty: PayloadType, data: &[u8]) -> Result<Self, TryReserveError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(data.len())?;
        buf.extend_from_slice(data);
        Ok(Self { ty, data: buf })
    }
}

/// Splits a payload part into its type and data, if the type is known.
///
/// An empty part has no type byte and is treated like an unknown type.
pub(crate) fn classify(part: &[u8]) -> Option<(PayloadType, &[u8])> {
    let (ty, data) = part.split_first()?;
    Some((PayloadType::from_u8(*ty)?, data))
}
