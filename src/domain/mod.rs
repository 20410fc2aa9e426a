//! Core domain types for relay keys

mod field;
mod relay;

pub use field::RelayField;
pub use relay::{RelayPayload, RelayRecord};
