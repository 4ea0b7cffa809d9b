use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::diet::repo::DietEntry;

/// Request body for entry creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub name: String,
    pub description: String,
    pub is_diet: bool,
}

/// Request body for entry update. The target id travels in the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_diet: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<DietEntry> for EntryResponse {
    fn from(entry: DietEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            is_diet: entry.is_diet,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn entry_response_uses_wire_field_names() {
        let response = EntryResponse {
            id: Uuid::new_v4(),
            name: "Almoço".to_string(),
            description: "Arroz, feijão e salada".to_string(),
            is_diet: true,
            created_at: datetime!(2024-12-19 22:11:11 UTC),
            updated_at: datetime!(2024-12-19 22:11:11 UTC),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"isDiet\":true"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
        assert!(!json.contains("user_id"));
    }

    #[test]
    fn update_request_parses_camel_case_body() {
        let body = r#"{
            "id": "3f2c52cc-5b17-4f9f-9d5b-67a9e4d2f6a1",
            "name": "Jantar",
            "description": "Sopa",
            "isDiet": false
        }"#;

        let parsed: UpdateEntryRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "Jantar");
        assert!(!parsed.is_diet);
    }

    #[test]
    fn create_request_requires_all_fields() {
        let body = r#"{"name": "Café", "description": "Pão"}"#;
        assert!(serde_json::from_str::<CreateEntryRequest>(body).is_err());
    }
}
