// src/services/resolution_service_tests.rs
//
// UNIT TESTS: Term Resolution Guarantees
//
// PURPOSE:
// - Prove that resolution is total: every request yields a displayable result
// - Prove the mandatory step order: source -> cache -> live -> fallback
// - Prove that resolution is idempotent and does not mutate the term
//
// INVARIANTS TESTED:
// - Source-language requests never touch the provider
// - A cached language is served with zero provider invocations
// - Provider null and provider error both degrade to the source language
// - Resolving twice against the same state returns identical results

use std::sync::Arc;

use crate::domain::language::Language;
use crate::domain::resolution::ResolutionRequest;
use crate::domain::term::Term;
use crate::domain::translation::TranslationRecord;
use crate::error::AppError;
use crate::events::create_event_bus;
use crate::services::resolution_service::{
    MockTranslationProvider, ResolverConfig, TermResolutionService,
};

fn service() -> TermResolutionService {
    TermResolutionService::new(Arc::new(create_event_bus()))
}

fn leadership() -> Term {
    Term::new(
        "leadership".to_string(),
        "Leadership".to_string(),
        "The act of guiding others.".to_string(),
    )
}

fn leadership_with_arabic_cache() -> Term {
    let mut term = leadership();
    term.cache_translation(
        Language::Ar,
        TranslationRecord::new("القيادة".to_string(), "فعل توجيه الآخرين.".to_string()),
    )
    .unwrap();
    term
}

// ============================================================================
// STEP 1: SOURCE LANGUAGE SHORT-CIRCUIT
// ============================================================================

#[tokio::test]
async fn test_source_language_never_calls_provider() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(0);

    let term = leadership_with_arabic_cache();
    let request = ResolutionRequest::new("leadership", Language::En);

    let result = service().resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(result.display_text, "Leadership");
    assert_eq!(result.display_definition, "The act of guiding others.");
    assert_eq!(result.language_used, Language::En);
    assert!(!result.was_live_translated);
}

// ============================================================================
// STEP 2: CACHE PRIORITY
// ============================================================================

#[tokio::test]
async fn test_cached_language_served_with_zero_provider_invocations() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(0);

    let term = leadership_with_arabic_cache();
    let request = ResolutionRequest::new("leadership", Language::Ar);

    let result = service().resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(result.display_text, "القيادة");
    assert_eq!(result.language_used, Language::Ar);
    assert!(!result.was_live_translated);
    assert!(!result.is_fallback(Language::Ar));
}

#[tokio::test]
async fn test_cache_wins_over_live_translation() {
    // Even a provider that would succeed is never consulted for a cached
    // language
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(0).returning(|_, _| {
        Ok(Some(TranslationRecord::new(
            "fresher translation".to_string(),
            String::new(),
        )))
    });

    let term = leadership_with_arabic_cache();
    let request = ResolutionRequest::new("leadership", Language::Ar);

    let result = service().resolve(&request, &term, &provider).await.unwrap();
    assert_eq!(result.display_text, "القيادة");
}

// ============================================================================
// STEP 3: LIVE TRANSLATION
// ============================================================================

#[tokio::test]
async fn test_live_translation_success() {
    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .withf(|slug, language| slug == "leadership" && *language == Language::Ar)
        .times(1)
        .returning(|_, _| {
            Ok(Some(TranslationRecord::new(
                "القيادة".to_string(),
                "فعل توجيه الآخرين.".to_string(),
            )))
        });

    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Ar);

    let result = service().resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(result.display_text, "القيادة");
    assert_eq!(result.language_used, Language::Ar);
    assert!(result.was_live_translated);
}

#[tokio::test]
async fn test_provider_null_falls_back_to_source() {
    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .times(1)
        .returning(|_, _| Ok(None));

    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Fa);

    let result = service().resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(result.display_text, "Leadership");
    assert_eq!(result.language_used, Language::En);
    assert!(!result.was_live_translated);
    assert!(result.is_fallback(Language::Fa));
}

#[tokio::test]
async fn test_provider_error_falls_back_to_source() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(1).returning(|_, _| {
        Err(AppError::TranslationService(
            "backend unreachable".to_string(),
        ))
    });

    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Fa);

    let result = service().resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(result.language_used, Language::En);
    assert_eq!(result.display_text, "Leadership");
}

// ============================================================================
// IDEMPOTENCE AND PURITY
// ============================================================================

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(2).returning(|_, _| {
        Ok(Some(TranslationRecord::new(
            "Liderazgo".to_string(),
            "El acto de guiar a otros.".to_string(),
        )))
    });

    let service = service();
    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Es);

    let first = service.resolve(&request, &term, &provider).await.unwrap();
    let second = service.resolve(&request, &term, &provider).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_resolution_does_not_mutate_the_term() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().returning(|_, _| {
        Ok(Some(TranslationRecord::new(
            "Liderlik".to_string(),
            String::new(),
        )))
    });

    let term = leadership_with_arabic_cache();
    let before = term.clone();

    let service = service();
    for language in [Language::En, Language::Ar, Language::Tr] {
        let request = ResolutionRequest::new("leadership", language);
        service.resolve(&request, &term, &provider).await.unwrap();
    }

    // The resolver reads the cache; it never writes it
    assert_eq!(term.cached_translations, before.cached_translations);
    assert_eq!(term.updated_at, before.updated_at);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[tokio::test]
async fn test_suppression_disabled_surfaces_the_failure() {
    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = TermResolutionService::with_config(
        Arc::new(create_event_bus()),
        ResolverConfig {
            suppress_translation_errors: false,
            ..ResolverConfig::default()
        },
    );

    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Ur);

    let result = service.resolve(&request, &term, &provider).await;
    assert!(matches!(
        result,
        Err(AppError::TranslationUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_language_outside_configured_set_degrades_to_source() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(0);

    let service = TermResolutionService::with_config(
        Arc::new(create_event_bus()),
        ResolverConfig {
            languages: crate::domain::language::LanguageSet::new(&[Language::Ar, Language::Fa]),
            suppress_translation_errors: true,
        },
    );

    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Ru);

    let result = service.resolve(&request, &term, &provider).await.unwrap();
    assert_eq!(result.language_used, Language::En);
}
