use crate::name::AccountName;
use crate::payload::Payload;

/// A parsed Cash Account registration.
///
/// Filled in by [`crate::parse_opreturn`].  The name stays unset until a
/// parse gets past name validation, and payloads are only collected when
/// the caller asks for them.  A record can be [`cleared`](Self::clear) and
/// parsed into again without giving up its payload storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    name: Option<AccountName>,
    payloads: Vec<Payload>,
}

impl Account {
    /// Constructs a new empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an instance from a name and payloads.
    pub fn with_payloads(name: AccountName, payloads: Vec<Payload>) -> Self {
        Self {
            name: Some(name),
            payloads,
        }
    }

    /// Gets the account name, if one has been parsed.
    pub fn name(&self) -> Option<&AccountName> {
        self.name.as_ref()
    }

    /// Gets the stored payloads.
    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }

    /// Returns if neither a name nor any payloads are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.payloads.is_empty()
    }

    /// Drops the name and payloads, keeping the payload list's capacity.
    pub fn clear(&mut self) {
        self.name = None;
        self.payloads.clear();
    }

    /// Converts into the name and payloads.
    pub fn into_parts(self) -> (Option<AccountName>, Vec<Payload>) {
        (self.name, self.payloads)
    }

    pub(crate) fn set_name(&mut self, name: AccountName) {
        self.name = Some(name);
    }

    pub(crate) fn payloads_mut(&mut self) -> &mut Vec<Payload> {
        &mut self.payloads
    }
}
