/// User-facing message for any failed save
pub const GENERIC_SAVE_ERROR: &str = "An unknown error occurred while saving relay public key";

/// Errors returned by a relay key save
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The remote save failed; the cause is deliberately not carried
    #[error("An unknown error occurred while saving relay public key")]
    Failed,

    #[error("A save is already in progress")]
    InFlight,
}
