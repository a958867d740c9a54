use regex::Regex;
use std::sync::OnceLock;

use super::entity::Term;
use crate::domain::{DomainError, DomainResult};

/// Validates all Term invariants
/// These are the absolute rules that must hold for a Term to be valid
pub fn validate_term(term: &Term) -> DomainResult<()> {
    validate_slug(&term.slug)?;
    validate_canonical_text(&term.canonical_text)?;
    validate_cache(term)?;
    Ok(())
}

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

/// Slug must be non-empty, lowercase, URL-safe
pub fn validate_slug(slug: &str) -> DomainResult<()> {
    if slug.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Term slug cannot be empty".to_string(),
        ));
    }
    if !slug_pattern().is_match(slug) {
        return Err(DomainError::InvariantViolation(format!(
            "Term slug '{}' must be lowercase letters, digits and single hyphens",
            slug
        )));
    }
    Ok(())
}

/// Canonical text cannot be empty
fn validate_canonical_text(text: &str) -> DomainResult<()> {
    if text.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Term canonical text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// The cache never holds the source language or an empty translation
fn validate_cache(term: &Term) -> DomainResult<()> {
    for (language, record) in &term.cached_translations {
        if language.is_source() {
            return Err(DomainError::InvariantViolation(format!(
                "Term '{}' caches the source language",
                term.slug
            )));
        }
        if !record.is_displayable() {
            return Err(DomainError::InvariantViolation(format!(
                "Term '{}' caches an empty translation for {}",
                term.slug, language
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Term domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Slug is unique and immutable once published
/// 3. Canonical text/definition are the only English representation
/// 4. The cache never contains the source language
/// 5. At most one cache entry per language
/// 6. Status moves draft -> needs_review -> published only
/// 7. Created timestamp never changes
/// 8. Updated timestamp reflects last modification

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::Language;
    use crate::domain::translation::TranslationRecord;

    fn term() -> Term {
        Term::new(
            "servant-leadership".to_string(),
            "Servant Leadership".to_string(),
            "Leading by serving the team first.".to_string(),
        )
    }

    #[test]
    fn test_valid_term() {
        assert!(validate_term(&term()).is_ok());
    }

    #[test]
    fn test_slug_grammar() {
        assert!(validate_slug("leadership").is_ok());
        assert!(validate_slug("servant-leadership").is_ok());
        assert!(validate_slug("plan-b2").is_ok());

        assert!(validate_slug("").is_err());
        assert!(validate_slug("   ").is_err());
        assert!(validate_slug("Leadership").is_err());
        assert!(validate_slug("servant leadership").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("-leading-hyphen").is_err());
    }

    #[test]
    fn test_empty_canonical_text_fails() {
        let mut t = term();
        t.canonical_text = "   ".to_string();
        assert!(validate_term(&t).is_err());
    }

    #[test]
    fn test_cache_with_source_language_fails() {
        let mut t = term();
        // Bypass the entity guard to prove the validator catches it too
        t.cached_translations.insert(
            Language::En,
            TranslationRecord::new("Servant Leadership".to_string(), String::new()),
        );
        assert!(validate_term(&t).is_err());
    }

    #[test]
    fn test_cache_with_empty_translation_fails() {
        let mut t = term();
        t.cached_translations.insert(
            Language::Ar,
            TranslationRecord::new("  ".to_string(), "def".to_string()),
        );
        assert!(validate_term(&t).is_err());
    }
}
