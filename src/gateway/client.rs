//! HTTP client for the relay key endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::SubmitGateway;
use crate::config::ApiSettings;
use crate::domain::{RelayPayload, RelayRecord};

pub(super) fn encode_url_path_segment(segment: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        let is_unreserved =
            matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~');
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

pub(super) fn format_http_error(code: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {code}");
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return format!("HTTP {code}: {body}");
    };

    match value.get("detail").and_then(|v| v.as_str()) {
        Some(detail) => format!("HTTP {code}: {detail}"),
        None => format!("HTTP {code}: {body}"),
    }
}

/// Relay key client for one organization
#[derive(Clone)]
pub struct RelayKeyClient {
    base_url: String,
    org_slug: String,
    agent: ureq::Agent,
}

impl RelayKeyClient {
    /// Create a client with timeouts taken from the API settings
    pub fn new(settings: &ApiSettings, org_slug: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.timeout_connect_secs))
            .timeout_read(Duration::from_secs(settings.timeout_read_secs))
            .build();

        Self::with_agent(&settings.base_url, org_slug, agent)
    }

    /// Create a client around an agent supplied by the host
    pub fn with_agent(
        base_url: impl Into<String>,
        org_slug: impl Into<String>,
        agent: ureq::Agent,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            org_slug: org_slug.into(),
            agent,
        }
    }

    pub fn org_slug(&self) -> &str {
        &self.org_slug
    }

    /// URL of a single relay key
    pub fn relay_key_url(&self, public_key: &str) -> String {
        format!(
            "{}/organizations/{}/relay-keys/{}/",
            self.base_url,
            encode_url_path_segment(&self.org_slug),
            encode_url_path_segment(public_key)
        )
    }

    /// Fetch the stored record for `public_key`
    pub async fn fetch(&self, public_key: &str) -> Result<RelayRecord> {
        let agent = self.agent.clone();
        let url = self.relay_key_url(public_key);

        tokio::task::spawn_blocking(move || get_relay_key(&agent, &url))
            .await
            .context("Relay key fetch task failed")?
    }

    /// Blocking variant of `SubmitGateway::save`
    pub fn save_blocking(&self, public_key: &str, payload: &RelayPayload) -> Result<RelayRecord> {
        put_relay_key(&self.agent, &self.relay_key_url(public_key), payload)
    }
}

fn status_error(e: ureq::Error) -> anyhow::Error {
    match e {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            anyhow::anyhow!(format_http_error(code, &body))
        }
        other => anyhow::anyhow!(other),
    }
}

fn get_relay_key(agent: &ureq::Agent, url: &str) -> Result<RelayRecord> {
    tracing::debug!("GET {}", url);

    let record: RelayRecord = agent
        .get(url)
        .call()
        .map_err(status_error)?
        .into_json()
        .context("Failed to parse relay key response")?;
    Ok(record)
}

fn put_relay_key(agent: &ureq::Agent, url: &str, payload: &RelayPayload) -> Result<RelayRecord> {
    tracing::debug!("PUT {}", url);

    let resp = agent.put(url).send_json(payload).map_err(status_error)?;

    let record: RelayRecord = resp
        .into_json()
        .context("Failed to parse relay key response")?;
    Ok(record)
}

#[async_trait]
impl SubmitGateway for RelayKeyClient {
    async fn save(&self, public_key: &str, payload: &RelayPayload) -> Result<RelayRecord> {
        let agent = self.agent.clone();
        let url = self.relay_key_url(public_key);
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || put_relay_key(&agent, &url, &payload))
            .await
            .context("Relay key save task failed")?
    }
}
