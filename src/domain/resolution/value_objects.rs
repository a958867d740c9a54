// src/domain/resolution/value_objects.rs
//
// Resolution Value Objects
//
// Pure, immutable data structures representing the outcome of resolving a
// term into a display language. These are the bridge between stored term
// content and what the portal actually renders.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects
// - No I/O operations
// - Deterministic construction
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::domain::term::Term;
use crate::domain::translation::TranslationRecord;

// ============================================================================
// RESOLUTION REQUEST
// ============================================================================

/// A request to render one term in one language.
/// Ephemeral: never persisted, one per language-switch action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// Slug of the term being displayed
    pub term_slug: String,

    /// The language the reader asked for
    pub requested_language: Language,
}

impl ResolutionRequest {
    pub fn new(term_slug: impl Into<String>, requested_language: Language) -> Self {
        Self {
            term_slug: term_slug.into(),
            requested_language,
        }
    }
}

// ============================================================================
// RESOLUTION RESULT
// ============================================================================

/// The best available textual representation of a term.
///
/// Total by construction: every resolution produces one of these, and
/// `language_used` differing from the requested language is the only visible
/// trace of a translation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Term name to display
    pub display_text: String,

    /// Definition to display
    pub display_definition: String,

    /// The language actually rendered (source on fallback)
    pub language_used: Language,

    /// True only when the text came from a live translation call
    pub was_live_translated: bool,
}

impl ResolutionResult {
    /// The source-language representation of a term. No I/O behind this.
    pub fn source(term: &Term) -> Self {
        Self {
            display_text: term.canonical_text.clone(),
            display_definition: term.canonical_definition.clone(),
            language_used: Language::SOURCE,
            was_live_translated: false,
        }
    }

    /// A cached translation returned verbatim.
    pub fn from_cache(language: Language, record: &TranslationRecord) -> Self {
        Self {
            display_text: record.text.clone(),
            display_definition: record.definition.clone(),
            language_used: language,
            was_live_translated: false,
        }
    }

    /// A freshly produced live translation.
    pub fn live(language: Language, record: TranslationRecord) -> Self {
        Self {
            display_text: record.text,
            display_definition: record.definition,
            language_used: language,
            was_live_translated: true,
        }
    }

    /// True when the reader got a different language than requested.
    pub fn is_fallback(&self, requested: Language) -> bool {
        self.language_used != requested
    }
}

// ============================================================================
// RESOLUTION OUTCOME (TRACEABILITY)
// ============================================================================

/// Which branch of the decision algorithm produced a result.
/// Used for events and diagnostics, never for user-facing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// Requested language was the source language
    Source,

    /// Served from cached_translations
    Cache,

    /// Served from a live translation call
    Live,

    /// Translation unavailable, degraded to the source language
    Fallback,
}

impl std::fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionPath::Source => write!(f, "source"),
            ResolutionPath::Cache => write!(f, "cache"),
            ResolutionPath::Live => write!(f, "live"),
            ResolutionPath::Fallback => write!(f, "fallback"),
        }
    }
}
