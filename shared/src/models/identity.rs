//! Caller identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque display-name identity supplied by the external session provider
///
/// The engine performs no authentication. It only compares identities to
/// enforce that the owner of a booking is the one paying for, cancelling
/// or viewing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Identity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_serde() {
        let id = Identity::new("Budi Santoso");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Budi Santoso\"");
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity::from("alice").to_string(), "alice");
    }
}
