use crate::locale::LangCountry;
use serde::{Deserialize, Serialize};

/// List-view document record; omits the content body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub author: String,
    pub subject: String,
    #[serde(default)]
    pub locale: Option<LangCountry>,
}

/// Full document record used for single fetch, create and update.
///
/// Has no identifier: the server assigns it, and create requests never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAllFields {
    pub author: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub locale: Option<LangCountry>,
}

/// Partial-match criteria for listing documents. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl DocumentFilter {
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            subject: None,
        }
    }

    pub fn by_subject(subject: impl Into<String>) -> Self {
        Self {
            author: None,
            subject: Some(subject.into()),
        }
    }

    /// Drop blank criteria so they never reach the query string.
    pub fn normalized(self) -> Self {
        Self {
            author: super::non_blank(self.author),
            subject: super::non_blank(self.subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> DocumentAllFields {
        DocumentAllFields {
            author: "Machado de Assis".to_string(),
            subject: "Dom Casmurro".to_string(),
            content: "Uma noite destas, vindo da cidade para o Engenho Novo...".to_string(),
            locale: Some(LangCountry::PtBr),
        }
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_document_deserialization() {
        let json = r#"{"id": 7, "author": "Smith", "subject": "Contracts", "locale": "EN_US"}"#;
        let doc: Document = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(doc.id, 7);
        assert_eq!(doc.author, "Smith");
        assert_eq!(doc.locale, Some(LangCountry::EnUs));
    }

    #[test]
    fn test_document_missing_or_null_locale() {
        let missing = r#"{"id": 1, "author": "A", "subject": "S"}"#;
        let null = r#"{"id": 1, "author": "A", "subject": "S", "locale": null}"#;

        let a: Document = serde_json::from_str(missing).expect("Should deserialize");
        let b: Document = serde_json::from_str(null).expect("Should deserialize");
        assert!(a.locale.is_none());
        assert!(b.locale.is_none());
    }

    // ==================== DocumentAllFields Tests ====================

    #[test]
    fn test_all_fields_never_serializes_id() {
        let json = serde_json::to_value(sample_fields()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert_eq!(object.len(), 4);
        assert_eq!(json["locale"], "PT_BR");
    }

    #[test]
    fn test_all_fields_absent_locale_is_null() {
        let mut fields = sample_fields();
        fields.locale = None;
        let json = serde_json::to_value(fields).unwrap();
        assert!(json["locale"].is_null());
    }

    #[test]
    fn test_all_fields_ignores_server_id() {
        let json = r#"{"id": 99, "author": "A", "subject": "S", "content": "C", "locale": null}"#;
        let fields: DocumentAllFields = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(fields.content, "C");
    }

    // ==================== DocumentFilter Tests ====================

    #[test]
    fn test_empty_filter_serializes_to_nothing() {
        let json = serde_json::to_value(DocumentFilter::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_filter_only_present_keys() {
        let json = serde_json::to_value(DocumentFilter::by_author("Smith")).unwrap();
        assert_eq!(json, serde_json::json!({"author": "Smith"}));
    }

    #[test]
    fn test_normalized_drops_blank_values() {
        let filter = DocumentFilter {
            author: Some("   ".to_string()),
            subject: Some(" Law ".to_string()),
        }
        .normalized();

        assert!(filter.author.is_none());
        assert_eq!(filter.subject.as_deref(), Some("Law"));
    }
}
