// src/domain/language.rs
//
// Supported display languages.
//
// CRITICAL RULES:
// - `En` is the source language; canonical term content is always English
// - The enum is the full set the product can ever serve
// - A deployment narrows it through `LanguageSet` (configuration, not structure)

use serde::{Deserialize, Serialize};

/// A display language supported by the lexicon.
///
/// English is the source language: terms are authored in English and every
/// other language is a translation of that canonical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
    Fa,
    Es,
    Fr,
    Ru,
    Tr,
    Ur,
}

impl Language {
    /// The source language all canonical content is authored in.
    pub const SOURCE: Language = Language::En;

    /// Every language the product knows about, source first.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Ar,
        Language::Fa,
        Language::Es,
        Language::Fr,
        Language::Ru,
        Language::Tr,
        Language::Ur,
    ];

    /// Returns true for the source language.
    pub fn is_source(self) -> bool {
        self == Self::SOURCE
    }

    /// Canonical two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fa => "fa",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Ur => "ur",
        }
    }

    /// Parse a language code.
    ///
    /// Tolerant of case and region tags ("ar-EG", "FA_IR"). Returns None for
    /// anything outside the supported set.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or(normalized.as_str());
        match primary {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            "fa" => Some(Language::Fa),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "ru" => Some(Language::Ru),
            "tr" => Some(Language::Tr),
            "ur" => Some(Language::Ur),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The set of languages a deployment actually serves.
///
/// The source language is always a member. The minimal deployment carries two
/// non-source languages, the extended one all seven; the size is a
/// configuration decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSet {
    languages: Vec<Language>,
}

impl LanguageSet {
    /// Build a set from the requested non-source languages.
    ///
    /// The source language is inserted implicitly; duplicates and an explicit
    /// source entry are ignored.
    pub fn new(non_source: &[Language]) -> Self {
        let mut languages = vec![Language::SOURCE];
        for lang in non_source {
            if !lang.is_source() && !languages.contains(lang) {
                languages.push(*lang);
            }
        }
        Self { languages }
    }

    /// Every supported language the product knows about.
    pub fn full() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
        }
    }

    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// All members, source first.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Members other than the source language.
    pub fn non_source(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied().filter(|l| !l.is_source())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::full()
    }
}
