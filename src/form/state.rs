//! Form state for the relay key dialog

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{RelayField, RelayPayload};

/// Current value of every form field.
///
/// One `String` per declared field, so no field can ever be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub public_key: String,
    pub description: String,
}

impl FormValues {
    pub fn get(&self, field: RelayField) -> &str {
        match field {
            RelayField::Name => &self.name,
            RelayField::PublicKey => &self.public_key,
            RelayField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: RelayField, value: String) {
        match field {
            RelayField::Name => self.name = value,
            RelayField::PublicKey => self.public_key = value,
            RelayField::Description => self.description = value,
        }
    }

    /// Request body for a save: everything except the public key
    pub fn to_payload(&self) -> RelayPayload {
        RelayPayload {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Snapshot of the dialog's editable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Dialog title supplied by the variant
    pub title: String,
    pub values: FormValues,
    /// Fields that must be non-blank for the form to be valid
    pub required: BTreeSet<RelayField>,
    /// Per-field error message; a missing key means no error
    pub errors: BTreeMap<RelayField, String>,
    /// Per-field disabled flag, owned by the hosting context
    pub disabled: BTreeMap<RelayField, bool>,
    /// Derived from `values` and `required`, never set directly
    pub is_form_valid: bool,
}

impl FormState {
    /// The required set every relay key dialog starts with
    pub fn default_required() -> BTreeSet<RelayField> {
        [RelayField::Name, RelayField::PublicKey].into_iter().collect()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            values: FormValues::default(),
            required: Self::default_required(),
            errors: BTreeMap::new(),
            disabled: BTreeMap::new(),
            is_form_valid: false,
        }
    }
}
