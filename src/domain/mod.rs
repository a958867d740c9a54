// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod language;
pub mod resolution;
pub mod term;
pub mod translation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Term Domain
pub use term::{validate_slug, validate_term, Term, TermStatus};

// Languages
pub use language::{Language, LanguageSet};

// Translations
pub use translation::TranslationRecord;

// Resolution Domain
pub use resolution::{ResolutionPath, ResolutionRequest, ResolutionResult};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
