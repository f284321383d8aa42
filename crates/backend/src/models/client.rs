//! Rows of the `clients` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cabella_core::{ClientId, Email};

/// A registered customer.
///
/// The `password` column stores an Argon2id hash, never a plaintext
/// password. The hash stays inside the service layer; it is neither
/// logged nor put into a session.
#[derive(Debug, Clone, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub email: Email,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new customer account.
#[derive(Debug, Serialize)]
pub struct NewClient {
    pub email: Email,
    /// Argon2id hash of the chosen password.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Default, Serialize)]
pub struct ClientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_deserializes_wire_row() {
        let row = serde_json::json!({
            "id": "7f1e9d6a-0000-0000-0000-000000000000",
            "email": "claire@example.com",
            "password": "$argon2id$v=19$m=19456,t=2,p=1$abc$def",
            "name": "Claire Dubois",
            "phone": null,
            "address": "12 rue des Lilas",
            "created_at": "2024-05-01T10:30:00Z"
        });
        let client: Client = serde_json::from_value(row).unwrap();
        assert_eq!(client.name, "Claire Dubois");
        assert!(client.password_hash.starts_with("$argon2id$"));
        assert_eq!(client.phone, None);
    }

    #[test]
    fn test_patch_skips_untouched_fields() {
        let patch = ClientPatch {
            phone: Some("0601020304".to_owned()),
            ..ClientPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "phone": "0601020304" }));
    }

    #[test]
    fn test_new_client_serializes_hash_under_password_column() {
        let new = NewClient {
            email: Email::parse("claire@example.com").unwrap(),
            password_hash: "$argon2id$hash".to_owned(),
            name: "Claire".to_owned(),
            phone: None,
            address: None,
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["password"], "$argon2id$hash");
        assert!(json.get("password_hash").is_none());
    }
}
