//! Record and line-item identifiers. Seed data uses short readable ids
//! ("bill-1"); records created in a session get a UUID v4.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

fn validate_id(s: &str) -> Result<String, CoreError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidId("id must not be empty".to_string()));
    }
    // Ids are embedded in route paths.
    if trimmed.contains('/') || trimmed.contains('?') || trimmed.contains('#') {
        return Err(CoreError::InvalidId(format!("id contains a reserved character: {}", trimmed)));
    }
    if matches!(trimmed, "new" | "view") {
        return Err(CoreError::InvalidId(format!("id is a reserved path segment: {}", trimmed)));
    }
    Ok(trimmed.to_string())
}

/// Identifier of one record within an entity store. Inner field pub so seed data can build it directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub String);

/// Identifier of one line item within a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemId(pub String);

macro_rules! id_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_str(&self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let s = String::deserialize(de)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
id_serde!(RecordId);
id_serde!(LineItemId);

macro_rules! id_type {
    ($name:ident) => {
        impl $name {
            pub fn parse(s: impl AsRef<str>) -> Result<Self, CoreError> {
                Self::from_str(s.as_ref())
            }

            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(validate_id(s)?))
            }
        }
        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
id_type!(RecordId);
id_type!(LineItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_empty() {
        assert_eq!(RecordId::parse("  bill-1 ").unwrap().as_str(), "bill-1");
        assert!(RecordId::parse("   ").is_err());
        assert!(RecordId::parse("a/b").is_err());
    }

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let id: RecordId = serde_json::from_str("\"inv-7\"").unwrap();
        assert_eq!(id, RecordId("inv-7".to_string()));
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"inv-7\"");
    }
}
