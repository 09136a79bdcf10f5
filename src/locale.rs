//! Language/country codes used as document and translator field types.
//!
//! The backend accepts a closed set of locales and serializes them by their
//! enum name (e.g. `"PT_BR"`). An absent locale is modelled as
//! `Option<LangCountry>::None`, which travels as JSON `null`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a locale picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub code: LangCountry,
    pub tag: String,
    pub name: &'static str,
}

/// A supported language/country pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LangCountry {
    #[serde(rename = "EN_US")]
    EnUs,
    #[serde(rename = "EN_GB")]
    EnGb,
    #[serde(rename = "PT_BR")]
    PtBr,
    #[serde(rename = "PT_PT")]
    PtPt,
    #[serde(rename = "ES_ES")]
    EsEs,
    #[serde(rename = "ES_MX")]
    EsMx,
    #[serde(rename = "FR_FR")]
    FrFr,
    #[serde(rename = "DE_DE")]
    DeDe,
    #[serde(rename = "IT_IT")]
    ItIt,
    #[serde(rename = "JA_JP")]
    JaJp,
    #[serde(rename = "ZH_CN")]
    ZhCn,
}

impl LangCountry {
    /// Every supported locale, in display order.
    pub fn all() -> &'static [LangCountry] {
        &[
            LangCountry::EnUs,
            LangCountry::EnGb,
            LangCountry::PtBr,
            LangCountry::PtPt,
            LangCountry::EsEs,
            LangCountry::EsMx,
            LangCountry::FrFr,
            LangCountry::DeDe,
            LangCountry::ItIt,
            LangCountry::JaJp,
            LangCountry::ZhCn,
        ]
    }

    /// Wire code as the backend spells it (e.g. "PT_BR").
    pub fn code(&self) -> &'static str {
        match self {
            LangCountry::EnUs => "EN_US",
            LangCountry::EnGb => "EN_GB",
            LangCountry::PtBr => "PT_BR",
            LangCountry::PtPt => "PT_PT",
            LangCountry::EsEs => "ES_ES",
            LangCountry::EsMx => "ES_MX",
            LangCountry::FrFr => "FR_FR",
            LangCountry::DeDe => "DE_DE",
            LangCountry::ItIt => "IT_IT",
            LangCountry::JaJp => "JA_JP",
            LangCountry::ZhCn => "ZH_CN",
        }
    }

    /// BCP 47 language tag (e.g. "pt-BR").
    pub fn tag(&self) -> String {
        let (lang, country) = self.code().split_at(2);
        format!("{}-{}", lang.to_ascii_lowercase(), &country[1..])
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            LangCountry::EnUs => "English (United States)",
            LangCountry::EnGb => "English (United Kingdom)",
            LangCountry::PtBr => "Portuguese (Brazil)",
            LangCountry::PtPt => "Portuguese (Portugal)",
            LangCountry::EsEs => "Spanish (Spain)",
            LangCountry::EsMx => "Spanish (Mexico)",
            LangCountry::FrFr => "French (France)",
            LangCountry::DeDe => "German (Germany)",
            LangCountry::ItIt => "Italian (Italy)",
            LangCountry::JaJp => "Japanese (Japan)",
            LangCountry::ZhCn => "Chinese (China)",
        }
    }
}

impl From<LangCountry> for LocaleOption {
    fn from(locale: LangCountry) -> Self {
        Self {
            code: locale,
            tag: locale.tag(),
            name: locale.name(),
        }
    }
}

/// The full locale listing, in display order.
pub fn locale_options() -> Vec<LocaleOption> {
    LangCountry::all().iter().copied().map(LocaleOption::from).collect()
}

impl fmt::Display for LangCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
