// src/domain/translation.rs
//
// Translation records.
//
// Remote translation payloads are loosely typed and have drifted field names
// over time (text/term/name, definition/meaning/description). Everything is
// normalized into TranslationRecord at this boundary so nothing downstream
// ever branches on field-name variants.

use serde::{Deserialize, Serialize};

/// A translated representation of a term in one non-source language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Translated term name
    pub text: String,

    /// Translated definition
    pub definition: String,
}

impl TranslationRecord {
    pub fn new(text: String, definition: String) -> Self {
        Self { text, definition }
    }

    /// Normalize a loose JSON payload into a TranslationRecord.
    ///
    /// Accepts the field-name variants observed in stored cache blobs and
    /// provider responses. Returns None when no usable text can be found;
    /// a missing definition falls back to empty rather than failing the
    /// whole record.
    pub fn from_raw(raw: &serde_json::Value) -> Option<Self> {
        let obj = raw.as_object()?;

        let text = ["text", "term", "name", "translated_text"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .filter(|s| !s.is_empty())?;

        let definition = ["definition", "meaning", "description", "translated_definition"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .unwrap_or("");

        Some(Self {
            text: text.to_string(),
            definition: definition.to_string(),
        })
    }

    /// Returns true when the record carries displayable text.
    pub fn is_displayable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_canonical_fields() {
        let raw = json!({"text": "القيادة", "definition": "فعل توجيه الآخرين."});
        let record = TranslationRecord::from_raw(&raw).unwrap();
        assert_eq!(record.text, "القيادة");
        assert_eq!(record.definition, "فعل توجيه الآخرين.");
    }

    #[test]
    fn test_from_raw_variant_fields() {
        let raw = json!({"term": "Liderazgo", "meaning": "El acto de guiar a otros."});
        let record = TranslationRecord::from_raw(&raw).unwrap();
        assert_eq!(record.text, "Liderazgo");
        assert_eq!(record.definition, "El acto de guiar a otros.");

        let raw = json!({"name": "Leadership", "description": "Guiding others."});
        let record = TranslationRecord::from_raw(&raw).unwrap();
        assert_eq!(record.text, "Leadership");
    }

    #[test]
    fn test_from_raw_missing_definition_is_tolerated() {
        let raw = json!({"text": "Liderlik"});
        let record = TranslationRecord::from_raw(&raw).unwrap();
        assert_eq!(record.text, "Liderlik");
        assert_eq!(record.definition, "");
    }

    #[test]
    fn test_from_raw_rejects_unusable_payloads() {
        assert!(TranslationRecord::from_raw(&json!({})).is_none());
        assert!(TranslationRecord::from_raw(&json!({"text": "   "})).is_none());
        assert!(TranslationRecord::from_raw(&json!("just a string")).is_none());
        assert!(TranslationRecord::from_raw(&json!({"definition": "no text"})).is_none());
    }

    #[test]
    fn test_from_raw_trims_whitespace() {
        let raw = json!({"text": "  Rehberlik  ", "definition": "  Yol gösterme.  "});
        let record = TranslationRecord::from_raw(&raw).unwrap();
        assert_eq!(record.text, "Rehberlik");
        assert_eq!(record.definition, "Yol gösterme.");
    }
}
