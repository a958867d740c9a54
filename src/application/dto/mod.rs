// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::resolution::ResolutionResult;
use crate::domain::term::Term;

// ============================================================================
// TERM DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDto {
    pub id: String,
    pub slug: String,
    pub canonical_text: String,
    pub canonical_definition: String,
    pub status: String,
    pub cached_languages: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Term> for TermDto {
    fn from(term: Term) -> Self {
        Self {
            id: term.id.to_string(),
            slug: term.slug,
            canonical_text: term.canonical_text,
            canonical_definition: term.canonical_definition,
            status: term.status.to_string(),
            cached_languages: term
                .cached_translations
                .keys()
                .map(|l| l.to_string())
                .collect(),
            created_at: term.created_at.to_rfc3339(),
            updated_at: term.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTermDto {
    pub slug: String,
    pub canonical_text: String,
    pub canonical_definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTermDto {
    pub slug: String,
    pub canonical_text: Option<String>,
    pub canonical_definition: Option<String>,
}

// ============================================================================
// RESOLUTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResultDto {
    pub slug: String,
    pub requested_language: String,
    pub language_used: String,
    pub display_text: String,
    pub display_definition: String,
    pub was_live_translated: bool,
    pub is_fallback: bool,
}

impl ResolutionResultDto {
    pub fn from_result(slug: &str, requested: &str, result: ResolutionResult) -> Self {
        Self {
            slug: slug.to_string(),
            requested_language: requested.to_string(),
            language_used: result.language_used.to_string(),
            is_fallback: result.language_used.to_string() != requested,
            display_text: result.display_text,
            display_definition: result.display_definition,
            was_live_translated: result.was_live_translated,
        }
    }
}

// ============================================================================
// CACHE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheTranslationDto {
    pub slug: String,
    pub language: String,
    pub text: String,
    pub definition: Option<String>,
}

// ============================================================================
// EXPORT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummaryDto {
    pub path: String,
    pub term_count: usize,
    pub language_count: usize,
}
