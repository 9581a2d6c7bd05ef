//! Wire models for the clinic REST service.

use serde::{Deserialize, Serialize};

/// An email record owned by the remote service.
///
/// The front-end only ever holds a transient copy for the lifetime of a
/// view. Unknown fields in the JSON payload are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRecord {
    pub id: i64,
    pub email: String,
    /// Service-side creation timestamp, kept verbatim; never displayed.
    pub created_at: String,
    /// Service-side update timestamp, kept verbatim; never displayed.
    pub updated_at: String,
}

impl EmailRecord {
    /// The fields a confirmation view shows, in display order.
    ///
    /// Identifier and timestamps are excluded by construction — the list is
    /// declared here rather than filtered by key name at the render site.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![("email", self.email.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_payload() {
        let record: EmailRecord = serde_json::from_str(
            r#"{"id":42,"email":"a@b.com","createdAt":"2024-05-01T10:00:00Z","updatedAt":"2024-05-02T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.email, "a@b.com");
    }

    #[test]
    fn tolerates_extra_fields() {
        let record: EmailRecord = serde_json::from_str(
            r#"{"id":7,"email":"x@y.se","createdAt":"","updatedAt":"","source":"landing-page","verified":true}"#,
        )
        .unwrap();
        assert_eq!(record.email, "x@y.se");
    }

    #[test]
    fn display_fields_excludes_id_and_timestamps() {
        let record = EmailRecord {
            id: 42,
            email: "a@b.com".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-02T10:00:00Z".to_string(),
        };
        let fields = record.display_fields();
        assert_eq!(fields, vec![("email", "a@b.com".to_string())]);
    }
}
