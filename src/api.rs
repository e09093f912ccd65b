//! Wire types for the management API.
//!
//! Field names mirror the JSON the API speaks; note that the backup body
//! carries the policy id as an integer even though listings return ids as
//! strings.

use serde::{Deserialize, Serialize};

/// Response of `POST /session`.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    /// Session id; absent on malformed responses
    pub id: Option<String>,
    /// Rights granted to the authenticated principal
    #[serde(default)]
    pub rights: Vec<AccessRight>,
}

/// A right granted to a management session.
#[derive(Debug, Deserialize)]
pub struct AccessRight {
    /// Right identifier, e.g. "Access to Backup & Recover"
    pub id: String,
}

/// Generic item listing, as returned by `/slt`, `/slt/{id}/policy`,
/// and `/application`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemList<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// An SLA template from `GET /slt`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlaTemplate {
    pub id: String,
    pub name: String,
}

/// An SLA template policy from `GET /slt/{id}/policy`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlaPolicy {
    pub id: String,
    pub name: String,
}

/// An application from `GET /application`.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    pub id: String,
    #[serde(rename = "appname")]
    pub app_name: String,
}

/// Body of `POST /application/{id}/backup`.
#[derive(Debug, Serialize)]
pub struct BackupBody {
    pub policy: PolicyRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Policy reference inside [`BackupBody`].
#[derive(Debug, Serialize)]
pub struct PolicyRef {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_response_with_rights() {
        let json = r#"{
            "id": "sess-123",
            "rights": [
                {"id": "Access to Backup & Recover"},
                {"id": "System View"}
            ]
        }"#;

        let session: SessionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(session.id.as_deref(), Some("sess-123"));
        assert_eq!(session.rights.len(), 2);
        assert_eq!(session.rights[0].id, "Access to Backup & Recover");
    }

    #[test]
    fn test_session_response_missing_fields() {
        let session: SessionResponse = serde_json::from_str("{}").unwrap();
        assert!(session.id.is_none());
        assert!(session.rights.is_empty());
    }

    #[test]
    fn test_item_list_defaults_to_empty() {
        let list: ItemList<SlaTemplate> = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_application_rename() {
        let json = r#"{"items": [{"id": "4711", "appname": "host01"}]}"#;
        let list: ItemList<Application> = serde_json::from_str(json).unwrap();
        assert_eq!(list.items[0].app_name, "host01");
    }

    #[test]
    fn test_backup_body_with_label() {
        let body = BackupBody {
            policy: PolicyRef { id: 42 },
            label: Some("On-demand backup".to_string()),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"policy": {"id": 42}, "label": "On-demand backup"})
        );
    }

    #[test]
    fn test_backup_body_omits_missing_label() {
        let body = BackupBody {
            policy: PolicyRef { id: 42 },
            label: None,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"policy": {"id": 42}}));
    }
}
