//! relaykey - relay key dialog form state
//!
//! Holds the editable fields of the dialog that registers or edits a Relay
//! public key, validates them, and saves the result through a remote endpoint.
//!
//! ## Pieces
//!
//! 1. **Form** (`form`): values, per-field errors, disabled flags and the
//!    validity flag that gates the save action.
//! 2. **Gateway** (`gateway`): the save abstraction and its HTTP client.
//! 3. **Host** (`host`): callbacks into whatever shows the dialog.

pub mod config;
pub mod domain;
pub mod form;
pub mod gateway;
pub mod host;

pub use domain::*;
