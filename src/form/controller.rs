//! Form state controller for the relay key dialog
//!
//! Edits update a value and clear that field's error, blurs validate a single
//! field, and every value change recomputes the validity flag that gates the
//! save action. Errors only ever appear on blur.

use anyhow::Result;

use crate::domain::{RelayField, RelayPayload, RelayRecord};
use crate::gateway::SubmitGateway;
use crate::host::DialogHost;

use super::error::{GENERIC_SAVE_ERROR, SubmitError};
use super::state::FormState;
use super::validator::{BlurOutcome, REQUIRED_MESSAGE, blur_outcome, is_blank};
use super::variant::DialogVariant;

/// A save handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Identifier of the record, sent in the request path
    pub public_key: String,
    pub payload: RelayPayload,
}

/// Owns the state of one dialog instance
#[derive(Debug)]
pub struct FormController {
    pub(super) state: FormState,
    submitting: bool,
}

impl FormController {
    /// Create the controller for a dialog variant
    pub fn initialize(variant: DialogVariant) -> Self {
        let disabled = variant
            .disabled
            .into_iter()
            .map(|field| (field, true))
            .collect();

        let mut controller = Self {
            state: FormState {
                title: variant.title,
                values: variant.initial_values,
                disabled,
                ..FormState::default()
            },
            submitting: false,
        };
        controller.recompute_validity();
        controller
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn value(&self, field: RelayField) -> &str {
        self.state.values.get(field)
    }

    pub fn error(&self, field: RelayField) -> Option<&str> {
        self.state.errors.get(&field).map(String::as_str)
    }

    pub fn is_required(&self, field: RelayField) -> bool {
        self.state.required.contains(&field)
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.is_form_valid
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the save action must be disabled
    pub fn is_save_disabled(&self) -> bool {
        !self.state.is_form_valid || self.submitting
    }

    pub fn is_field_disabled(&self, field: RelayField) -> bool {
        self.state.disabled.get(&field).copied().unwrap_or(false)
    }

    /// Mark a field editable or read-only. Only the hosting context calls this.
    pub fn set_field_disabled(&mut self, field: RelayField, disabled: bool) {
        self.state.disabled.insert(field, disabled);
    }

    /// Apply an edit. Any string is accepted here; the field's error is
    /// cleared regardless of the new value.
    pub fn on_field_change(&mut self, field: RelayField, value: impl Into<String>) {
        self.state.values.set(field, value.into());
        if self.state.errors.remove(&field).is_some() {
            tracing::debug!("Cleared error for {} on change", field);
        }
        self.recompute_validity();
    }

    /// Validate a single field when it loses focus.
    ///
    /// Returns `true` if the error map changed.
    pub fn on_field_blur(&mut self, field: RelayField) -> bool {
        let has_error = self.state.errors.contains_key(&field);
        match blur_outcome(self.state.values.get(field), has_error) {
            BlurOutcome::Keep => false,
            BlurOutcome::SetRequired => {
                tracing::debug!("{} left blank", field);
                self.state
                    .errors
                    .insert(field, REQUIRED_MESSAGE.to_string());
                true
            }
            BlurOutcome::Clear => {
                self.state.errors.remove(&field);
                true
            }
        }
    }

    /// Recompute the validity flag from the current values
    pub fn recompute_validity(&mut self) -> bool {
        let values = &self.state.values;
        self.state.is_form_valid = self
            .state
            .required
            .iter()
            .all(|field| !is_blank(values.get(*field)));
        self.state.is_form_valid
    }

    /// Start a save and take the single in-flight slot.
    ///
    /// Validity is not checked here: hosts gate on `is_save_disabled`.
    pub fn begin_submit(&mut self) -> Result<SaveRequest, SubmitError> {
        if self.submitting {
            tracing::warn!("Ignoring save while another is in progress");
            return Err(SubmitError::InFlight);
        }
        self.submitting = true;

        Ok(SaveRequest {
            public_key: self.state.values.public_key.clone(),
            payload: self.state.values.to_payload(),
        })
    }

    /// Complete a save started with `begin_submit`.
    ///
    /// On success the host receives the record and is asked to close. On
    /// failure the host gets one generic notification and the dialog stays open.
    pub fn finish_submit<H>(
        &mut self,
        result: Result<RelayRecord>,
        host: &mut H,
    ) -> Result<RelayRecord, SubmitError>
    where
        H: DialogHost + ?Sized,
    {
        self.submitting = false;

        match result {
            Ok(record) => {
                tracing::info!("Saved relay key {}", record.public_key);
                host.on_submit_success(&record);
                host.close_modal();
                Ok(record)
            }
            Err(e) => {
                tracing::error!("Unknown error while saving relay key");
                tracing::debug!("Relay key save failure: {:#}", e);
                host.notify_error(GENERIC_SAVE_ERROR);
                Err(SubmitError::Failed)
            }
        }
    }

    /// Save the current values through `gateway`
    pub async fn submit<G, H>(
        &mut self,
        gateway: &G,
        host: &mut H,
    ) -> Result<RelayRecord, SubmitError>
    where
        G: SubmitGateway + ?Sized,
        H: DialogHost + ?Sized,
    {
        let request = self.begin_submit()?;
        let guard = InFlightGuard { form: self };
        let result = gateway.save(&request.public_key, &request.payload).await;
        guard.form.finish_submit(result, host)
    }
}

/// Releases the in-flight slot if a save is abandoned before it finishes,
/// e.g. when the `submit` future is dropped on a timeout.
struct InFlightGuard<'a> {
    form: &'a mut FormController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.form.submitting {
            tracing::debug!("Relay key save abandoned");
            self.form.submitting = false;
        }
    }
}
