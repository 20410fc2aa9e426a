//! Field validation rules
//!
//! Pure functions shared by the change and blur paths of the form controller.

/// Message recorded for a required field left blank on blur
pub const REQUIRED_MESSAGE: &str = "Field Required";

/// A value is blank when nothing but whitespace remains after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// What a blur should do to a field's error entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOutcome {
    /// Leave the error map untouched
    Keep,
    /// Record `REQUIRED_MESSAGE` for the field
    SetRequired,
    /// Remove the field's error
    Clear,
}

/// Decide the blur outcome for a field.
///
/// Only state changes are reported: a blank field that already shows an
/// error, or a filled field without one, both yield `Keep`.
pub fn blur_outcome(value: &str, has_error: bool) -> BlurOutcome {
    match (is_blank(value), has_error) {
        (true, true) => BlurOutcome::Keep,
        (true, false) => BlurOutcome::SetRequired,
        (false, true) => BlurOutcome::Clear,
        (false, false) => BlurOutcome::Keep,
    }
}
