use std::collections::TryReserveError;
use std::fmt;
use std::str;

use thiserror::Error;

/// Shortest allowed account name.
pub const MIN_NAME_LEN: usize = 1;

/// Longest allowed account name.
pub const MAX_NAME_LEN: usize = 99;

/// Reason a byte string is not a valid account name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidName {
    /// Name length outside [`MIN_NAME_LEN`]..=[`MAX_NAME_LEN`].
    #[error("account name must be 1 to 99 characters (got {0})")]
    Length(usize),

    /// Byte outside `[A-Za-z0-9_]`.
    #[error("invalid byte {byte:#04x} in account name at {at}")]
    Char {
        /// The offending byte.
        byte: u8,
        /// Its index in the name.
        at: usize,
    },
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn validate(name: &[u8]) -> Result<(), InvalidName> {
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len()) {
        return Err(InvalidName::Length(name.len()));
    }

    match name.iter().position(|b| !is_name_char(*b)) {
        Some(at) => Err(InvalidName::Char { byte: name[at], at }),
        None => Ok(()),
    }
}

/// Checks if a byte string is a valid account name.
pub fn check_name(name: &[u8]) -> bool {
    validate(name).is_ok()
}

/// Validated Cash Account name.
///
/// Always 1 to 99 characters of `[A-Za-z0-9_]`, so it is plain ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountName(String);

impl AccountName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Converts to the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Copies out a name from bytes that have already been validated,
    /// reporting allocation failure instead of aborting.
    pub(crate) fn try_copy_validated(name: &[u8]) -> Result<Self, TryReserveError> {
        let mut s = String::new();
        s.try_reserve_exact(name.len())?;
        // Validated names are ASCII, one byte per char.
        s.extend(name.iter().copied().map(char::from));
        Ok(Self(s))
    }
}

impl TryFrom<&[u8]> for AccountName {
    type Error = InvalidName;

    fn try_from(name: &[u8]) -> Result<Self, Self::Error> {
        validate(name)?;
        Ok(Self(name.iter().copied().map(char::from).collect()))
    }
}

impl str::FromStr for AccountName {
    type Err = InvalidName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.0
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AccountName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AccountName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
