//! Relay key dialog form
//!
//! - `controller`: field values, errors and the save gate
//! - `validator`: blank check and blur policy
//! - `variant`: title and starting values per dialog

mod controller;
mod error;
mod state;
mod validator;
mod variant;


pub use controller::{FormController, SaveRequest};
pub use error::{GENERIC_SAVE_ERROR, SubmitError};
pub use state::{FormState, FormValues};
pub use validator::{BlurOutcome, REQUIRED_MESSAGE, blur_outcome, is_blank};
pub use variant::DialogVariant;
