// src/services/resolution_service_hardening_tests.rs
//
// HARDENING TESTS: Term Resolution Under Misbehaving Inputs
//
// PURPOSE:
// - Prove totality against providers that error, stall or return garbage
// - Prove last-request-wins semantics for overlapping requests
// - Prove the fallback event trail is emitted

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::language::Language;
use crate::domain::resolution::ResolutionRequest;
use crate::domain::term::Term;
use crate::domain::translation::TranslationRecord;
use crate::error::{AppError, AppResult};
use crate::events::{create_event_bus, EventBus, TranslationFallback};
use crate::services::resolution_service::{
    MockTranslationProvider, TermResolutionService, TranslationProvider,
};

fn leadership() -> Term {
    Term::new(
        "leadership".to_string(),
        "Leadership".to_string(),
        "The act of guiding others.".to_string(),
    )
}

/// Provider that waits before answering, to simulate a slow backend.
struct SlowProvider {
    delay: Duration,
    text: String,
}

#[async_trait]
impl TranslationProvider for SlowProvider {
    async fn translate(
        &self,
        _slug: &str,
        _language: Language,
    ) -> AppResult<Option<TranslationRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(TranslationRecord::new(self.text.clone(), String::new())))
    }
}

// ============================================================================
// GARBAGE PROVIDERS
// ============================================================================

#[tokio::test]
async fn test_whitespace_only_translation_falls_back() {
    let mut provider = MockTranslationProvider::new();
    provider.expect_translate().times(1).returning(|_, _| {
        Ok(Some(TranslationRecord::new(
            "   ".to_string(),
            "definition without text".to_string(),
        )))
    });

    let service = TermResolutionService::new(Arc::new(create_event_bus()));
    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Ar);

    let result = service.resolve(&request, &term, &provider).await.unwrap();
    assert_eq!(result.language_used, Language::En);
    assert_eq!(result.display_text, "Leadership");
}

#[tokio::test]
async fn test_always_failing_provider_is_total_over_every_language() {
    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .returning(|_, _| Err(AppError::TranslationService("down".to_string())));

    let service = TermResolutionService::new(Arc::new(create_event_bus()));
    let term = leadership();

    for language in Language::ALL {
        let request = ResolutionRequest::new("leadership", language);
        let result = service.resolve(&request, &term, &provider).await.unwrap();
        assert!(!result.display_text.is_empty());
        assert_eq!(result.language_used, Language::En);
    }
}

#[tokio::test]
async fn test_fallback_emits_diagnostic_event() {
    let event_bus = Arc::new(create_event_bus());
    let seen: Arc<std::sync::Mutex<Vec<TranslationFallback>>> = Arc::default();
    {
        let seen = Arc::clone(&seen);
        event_bus.subscribe::<TranslationFallback, _>(move |event| {
            seen.lock().unwrap().push(event.clone());
        });
    }

    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = TermResolutionService::new(Arc::clone(&event_bus));
    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Fa);

    service.resolve(&request, &term, &provider).await.unwrap();

    let events = seen.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].slug, "leadership");
    assert_eq!(events[0].requested_language, "fa");

    let log = event_bus.get_event_log();
    assert!(log
        .iter()
        .any(|entry| entry.event_type == "TranslationFallback"));
}

// ============================================================================
// LAST REQUEST WINS
// ============================================================================

#[tokio::test]
async fn test_stale_resolution_is_discarded() {
    let service = Arc::new(TermResolutionService::new(Arc::new(create_event_bus())));
    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Ar);

    let slow = SlowProvider {
        delay: Duration::from_millis(100),
        text: "stale answer".to_string(),
    };
    let fast = SlowProvider {
        delay: Duration::from_millis(0),
        text: "fresh answer".to_string(),
    };

    let slow_handle = {
        let service = Arc::clone(&service);
        let term = term.clone();
        let request = request.clone();
        tokio::spawn(async move { service.resolve_latest(&request, &term, &slow).await })
    };

    // Let the slow request register its ticket before superseding it
    tokio::time::sleep(Duration::from_millis(20)).await;

    let fresh = service
        .resolve_latest(&request, &term, &fast)
        .await
        .unwrap()
        .expect("newest request must land");
    assert_eq!(fresh.display_text, "fresh answer");

    let stale = slow_handle.await.unwrap().unwrap();
    assert!(stale.is_none(), "superseded request must be discarded");
}

#[tokio::test]
async fn test_requests_for_different_pairs_do_not_interfere() {
    let service = Arc::new(TermResolutionService::new(Arc::new(create_event_bus())));
    let term = leadership();

    let ar = SlowProvider {
        delay: Duration::from_millis(30),
        text: "القيادة".to_string(),
    };
    let fa = SlowProvider {
        delay: Duration::from_millis(0),
        text: "رهبری".to_string(),
    };

    let ar_handle = {
        let service = Arc::clone(&service);
        let term = term.clone();
        tokio::spawn(async move {
            let request = ResolutionRequest::new("leadership", Language::Ar);
            service.resolve_latest(&request, &term, &ar).await
        })
    };

    tokio::time::sleep(Duration::from_millis(5)).await;

    let fa_request = ResolutionRequest::new("leadership", Language::Fa);
    let fa_result = service
        .resolve_latest(&fa_request, &term, &fa)
        .await
        .unwrap();
    assert!(fa_result.is_some());

    let ar_result = ar_handle.await.unwrap().unwrap();
    assert!(
        ar_result.is_some(),
        "a request for another language must not supersede this one"
    );
}

// ============================================================================
// EVENT BUS ISOLATION
// ============================================================================

#[tokio::test]
async fn test_panicking_subscriber_does_not_break_resolution() {
    let event_bus: Arc<EventBus> = Arc::new(create_event_bus());
    event_bus.subscribe::<TranslationFallback, _>(|_| {
        panic!("subscriber bug");
    });

    let mut provider = MockTranslationProvider::new();
    provider
        .expect_translate()
        .times(1)
        .returning(|_, _| Ok(None));

    let service = TermResolutionService::new(event_bus);
    let term = leadership();
    let request = ResolutionRequest::new("leadership", Language::Es);

    let result = service.resolve(&request, &term, &provider).await.unwrap();
    assert_eq!(result.language_used, Language::En);
}
