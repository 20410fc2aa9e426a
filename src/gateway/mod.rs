//! Remote persistence of relay keys
//!
//! The form controller only sees the `SubmitGateway` trait. `RelayKeyClient`
//! is the HTTP implementation used by the CLI.

mod client;


use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{RelayPayload, RelayRecord};

pub use client::RelayKeyClient;

/// Saves a relay key on the remote system
#[async_trait]
pub trait SubmitGateway: Send + Sync {
    /// Persist `payload` under `public_key` and return the stored record.
    ///
    /// The public key identifies the record and is never part of the payload.
    async fn save(&self, public_key: &str, payload: &RelayPayload) -> Result<RelayRecord>;
}
