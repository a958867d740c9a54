use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::language::Language;
use crate::domain::translation::TranslationRecord;
use crate::domain::{DomainError, DomainResult};

/// A lexicon term: one unit of knowledge in the academy glossary.
/// This is the root entity for all term-related data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Internal immutable identifier
    pub id: Uuid,

    /// URL-safe unique key, immutable once published
    pub slug: String,

    /// Term name in the source language (English)
    pub canonical_text: String,

    /// Short definition in the source language
    pub canonical_definition: String,

    /// Cached translations keyed by language.
    /// Never contains the source language; canonical_text/canonical_definition
    /// are the only authoritative English representation.
    pub cached_translations: BTreeMap<Language, TranslationRecord>,

    /// Editorial status
    pub status: TermStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Editorial lifecycle of a term.
/// Only published terms are resolvable by end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermStatus {
    Draft,
    NeedsReview,
    Published,
}

impl Term {
    /// Create a new draft Term
    /// This is the only way to construct a Term outside of persistence
    pub fn new(slug: String, canonical_text: String, canonical_definition: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug,
            canonical_text,
            canonical_definition,
            cached_translations: BTreeMap::new(),
            status: TermStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update canonical content
    /// Preserves the creation timestamp and bumps the modification timestamp
    pub fn update_content(
        &mut self,
        canonical_text: Option<String>,
        canonical_definition: Option<String>,
    ) {
        if let Some(text) = canonical_text {
            self.canonical_text = text;
        }
        if let Some(definition) = canonical_definition {
            self.canonical_definition = definition;
        }
        self.updated_at = Utc::now();
    }

    /// Look up a cached translation.
    pub fn cached_translation(&self, language: Language) -> Option<&TranslationRecord> {
        if language.is_source() {
            return None;
        }
        self.cached_translations.get(&language)
    }

    /// Insert or replace a cached translation.
    /// Rejects the source language: English never lives in the cache.
    pub fn cache_translation(
        &mut self,
        language: Language,
        record: TranslationRecord,
    ) -> DomainResult<()> {
        if language.is_source() {
            return Err(DomainError::InvariantViolation(
                "Cached translations must not contain the source language".to_string(),
            ));
        }
        if !record.is_displayable() {
            return Err(DomainError::InvariantViolation(
                "Cached translation text cannot be empty".to_string(),
            ));
        }
        self.cached_translations.insert(language, record);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove a cached translation. Returns the evicted record, if any.
    pub fn evict_translation(&mut self, language: Language) -> Option<TranslationRecord> {
        let removed = self.cached_translations.remove(&language);
        if removed.is_some() {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Attempt an editorial status transition.
    ///
    /// Allowed: Draft -> NeedsReview -> Published, plus NeedsReview -> Draft
    /// for a rejected review. Everything else is an error; publishing is
    /// final.
    pub fn transition_to(&mut self, target: TermStatus) -> DomainResult<()> {
        use TermStatus::*;
        let allowed = matches!(
            (self.status, target),
            (Draft, NeedsReview) | (NeedsReview, Published) | (NeedsReview, Draft)
        );
        if !allowed {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot transition term '{}' from {} to {}",
                self.slug, self.status, target
            )));
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns true when end users may resolve this term.
    pub fn is_published(&self) -> bool {
        self.status == TermStatus::Published
    }
}

impl TermStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(TermStatus::Draft),
            "needs_review" => Some(TermStatus::NeedsReview),
            "published" => Some(TermStatus::Published),
            _ => None,
        }
    }
}

impl std::fmt::Display for TermStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermStatus::Draft => write!(f, "draft"),
            TermStatus::NeedsReview => write!(f, "needs_review"),
            TermStatus::Published => write!(f, "published"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leadership() -> Term {
        Term::new(
            "leadership".to_string(),
            "Leadership".to_string(),
            "The act of guiding others.".to_string(),
        )
    }

    #[test]
    fn test_new_term_starts_as_draft_with_empty_cache() {
        let term = leadership();
        assert_eq!(term.status, TermStatus::Draft);
        assert!(term.cached_translations.is_empty());
    }

    #[test]
    fn test_cache_rejects_source_language() {
        let mut term = leadership();
        let result = term.cache_translation(
            Language::En,
            TranslationRecord::new("Leadership".to_string(), "Guiding.".to_string()),
        );
        assert!(result.is_err());
        assert!(term.cached_translations.is_empty());
    }

    #[test]
    fn test_cache_rejects_empty_text() {
        let mut term = leadership();
        let result = term.cache_translation(
            Language::Ar,
            TranslationRecord::new("   ".to_string(), "something".to_string()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cached_translation_never_returns_source() {
        let term = leadership();
        assert!(term.cached_translation(Language::En).is_none());
    }

    #[test]
    fn test_status_transitions() {
        let mut term = leadership();

        assert!(term.transition_to(TermStatus::Published).is_err());
        assert!(term.transition_to(TermStatus::NeedsReview).is_ok());
        assert!(term.transition_to(TermStatus::Draft).is_ok());
        assert!(term.transition_to(TermStatus::NeedsReview).is_ok());
        assert!(term.transition_to(TermStatus::Published).is_ok());

        // Publishing is final
        assert!(term.transition_to(TermStatus::Draft).is_err());
        assert!(term.transition_to(TermStatus::NeedsReview).is_err());
    }

    #[test]
    fn test_evict_translation() {
        let mut term = leadership();
        term.cache_translation(
            Language::Ar,
            TranslationRecord::new("القيادة".to_string(), "تعريف".to_string()),
        )
        .unwrap();

        let removed = term.evict_translation(Language::Ar);
        assert!(removed.is_some());
        assert!(term.cached_translation(Language::Ar).is_none());
        assert!(term.evict_translation(Language::Ar).is_none());
    }
}
