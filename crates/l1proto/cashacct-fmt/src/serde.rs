use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::{AccountName, PayloadType};

impl Serialize for AccountName {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountName {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl de::Visitor<'_> for NameVisitor {
            type Value = AccountName;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a 1 to 99 character account name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AccountName, E> {
                AccountName::from_str(v).map_err(E::custom)
            }
        }

        d.deserialize_str(NameVisitor)
    }
}

impl Serialize for PayloadType {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.to_u8())
    }
}

impl<'de> Deserialize<'de> for PayloadType {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let b = u8::deserialize(d)?;
        PayloadType::try_from(b).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, Payload};

    #[test]
    fn test_name_roundtrip() {
        let name: AccountName = "Jonathan".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Jonathan\"");
        let back: AccountName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }

    #[test]
    fn test_name_invalid() {
        assert!(serde_json::from_str::<AccountName>("\"no spaces\"").is_err());
        assert!(serde_json::from_str::<AccountName>("\"\"").is_err());
    }

    #[test]
    fn test_payload_type_roundtrip() {
        for ty in PayloadType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, ty.to_u8().to_string());
            let back: PayloadType = serde_json::from_str(&json).unwrap();
            assert_eq!(ty, back);
        }
    }

    #[test]
    fn test_payload_type_unknown() {
        assert!(serde_json::from_str::<PayloadType>("5").is_err());
    }

    #[test]
    fn test_account_roundtrip() {
        let acct = Account::with_payloads(
            "Monsterbitar".parse().unwrap(),
            vec![Payload::new(PayloadType::KeyHash, vec![0x8d; 20])],
        );
        let json = serde_json::to_string(&acct).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(acct, back);
    }
}
