//! Dialog variants
//!
//! Each variant is plain data: the title to show, the values the form starts
//! with, and the fields the host keeps read-only.

use crate::domain::{RelayField, RelayRecord};

use super::state::FormValues;

/// Configuration supplied by a concrete dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogVariant {
    pub title: String,
    pub initial_values: FormValues,
    pub disabled: Vec<RelayField>,
}

impl DialogVariant {
    /// Register a new relay key
    pub fn add() -> Self {
        Self {
            title: "Register Key".to_string(),
            initial_values: FormValues::default(),
            disabled: Vec::new(),
        }
    }

    /// Edit an existing relay key.
    ///
    /// The public key identifies the record, so it is prefilled and disabled.
    pub fn edit(record: &RelayRecord) -> Self {
        Self {
            title: "Edit Key".to_string(),
            initial_values: FormValues {
                name: record.name.clone(),
                public_key: record.public_key.clone(),
                description: record.description.clone().unwrap_or_default(),
            },
            disabled: vec![RelayField::PublicKey],
        }
    }
}
