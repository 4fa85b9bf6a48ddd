//! Typed identifier for machines.
//!
//! Identifiers are supplied by clients and stored verbatim; the service never
//! generates or reshapes them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Machine`](crate::machine::Machine).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(String);

impl MachineId {
    /// Wrap a client-supplied identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MachineId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for MachineId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MachineId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_value_verbatim_when_displayed() {
        let id = MachineId::new("rack-2/slot 7");
        assert_eq!(id.to_string(), "rack-2/slot 7");
        assert_eq!(id.as_str(), "rack-2/slot 7");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = MachineId::from("m1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"m1\"");
    }

    #[test]
    fn should_compare_equal_when_parsed_from_same_text() {
        let parsed: MachineId = "m1".parse().unwrap();
        assert_eq!(parsed, MachineId::from("m1".to_string()));
    }
}
