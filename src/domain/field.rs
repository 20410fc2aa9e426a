//! Editable fields of the relay key dialog

use serde::{Deserialize, Serialize};

/// A field of the relay key form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelayField {
    /// Display name of the relay
    Name,
    /// Public key, also the record identifier
    PublicKey,
    /// Free-form description
    Description,
}

impl RelayField {
    /// All declared fields, in display order
    pub const ALL: [RelayField; 3] = [
        RelayField::Name,
        RelayField::PublicKey,
        RelayField::Description,
    ];

    /// Parse a field from its wire name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(RelayField::Name),
            "publicKey" => Some(RelayField::PublicKey),
            "description" => Some(RelayField::Description),
            _ => None,
        }
    }

    /// Get the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayField::Name => "name",
            RelayField::PublicKey => "publicKey",
            RelayField::Description => "description",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RelayField::Name => "Display Name",
            RelayField::PublicKey => "Public Key",
            RelayField::Description => "Description",
        }
    }
}

impl std::fmt::Display for RelayField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
