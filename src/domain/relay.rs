use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A relay credential as stored by the remote system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRecord {
    /// Public key, the identifier of the record
    pub public_key: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the key was first registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the key was last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Any other fields the server sent, kept so the record is forwarded as received
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of a relay key save request.
///
/// Carries every form field except the public key, which travels in the
/// request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_from_server() {
        let json = r#"{"publicKey":"abc123","name":"Prod Relay","description":"edge","created":"2024-03-01T10:00:00Z","lastModified":"2024-03-02T11:30:00Z"}"#;
        let record: RelayRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.public_key, "abc123");
        assert_eq!(record.name, "Prod Relay");
        assert_eq!(record.description.as_deref(), Some("edge"));
        assert!(record.created.is_some());
        assert!(record.last_modified.unwrap() > record.created.unwrap());
    }

    #[test]
    fn test_parse_record_without_optional_fields() {
        let json = r#"{"publicKey":"abc123","name":"Prod Relay"}"#;
        let record: RelayRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.description, None);
        assert_eq!(record.created, None);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive() {
        let json = r#"{"publicKey":"abc123","name":"Prod Relay","relayId":"r-1","firstSeen":null}"#;
        let record: RelayRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.extra["relayId"], "r-1");
        assert!(record.extra.contains_key("firstSeen"));

        let back = serde_json::to_value(&record).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_payload_has_no_public_key() {
        let payload = RelayPayload {
            name: "Prod Relay".to_string(),
            description: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("publicKey").is_none());
        assert_eq!(value["name"], "Prod Relay");
        assert_eq!(value["description"], "");
    }
}
