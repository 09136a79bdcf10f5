use crate::locale::LangCountry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub source_language: Option<LangCountry>,
    #[serde(default)]
    pub target_language: Option<LangCountry>,
}

/// Translator fields without the server-assigned id; create/update input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub source_language: Option<LangCountry>,
    #[serde(default)]
    pub target_language: Option<LangCountry>,
}

impl Translator {
    pub fn fields(&self) -> TranslatorFields {
        TranslatorFields {
            name: self.name.clone(),
            email: self.email.clone(),
            source_language: self.source_language,
            target_language: self.target_language,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TranslatorFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: None,
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: Some(email.into()),
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: super::non_blank(self.name),
            email: super::non_blank(self.email),
        }
    }
}
