// src/services/resolution_service.rs
//
// Term Resolution Service
//
// Produces the best available representation of a term in a requested
// display language, with zero user-visible errors on the default
// configuration.
//
// CRITICAL RULES:
// - Consumes a Term already loaded by the caller; never fetches it
// - Treats cached_translations as read-only; write-back belongs to
//   TranslationCacheService
// - Step order is mandatory: source check -> cache check -> live translation
// - Deterministic: same cache state + same provider outcome -> same result
// - Idempotent: resolving twice yields identical results
// - Emits resolution events; event emission is the only side effect

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::language::{Language, LanguageSet};
use crate::domain::resolution::{ResolutionPath, ResolutionRequest, ResolutionResult};
use crate::domain::term::Term;
use crate::domain::translation::TranslationRecord;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, TermResolved, TranslationFallback};

// ============================================================================
// TRANSLATION PROVIDER CAPABILITY
// ============================================================================

/// The injected live-translation capability.
///
/// Contract: `Ok(None)` when no translation can be produced. The resolver
/// additionally defends against `Err`, treating it exactly like `Ok(None)`.
/// Timeouts are the provider's responsibility; a timed-out call surfaces
/// here as an error and falls into the same single failure class.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        slug: &str,
        language: Language,
    ) -> AppResult<Option<TranslationRecord>>;
}

// ============================================================================
// RESOLVER CONFIGURATION
// ============================================================================

/// Configuration for the resolution service.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Languages this deployment serves
    pub languages: LanguageSet,

    /// When true (the product default), a failed translation silently
    /// degrades to the source language. When false, the failure surfaces
    /// as AppError::TranslationUnavailable so a future UI can show it.
    pub suppress_translation_errors: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            languages: LanguageSet::full(),
            suppress_translation_errors: true,
        }
    }
}

// ============================================================================
// RESOLUTION TRACKER (LAST REQUEST WINS)
// ============================================================================

/// Tracks the newest resolution request per (slug, language).
///
/// The reader can switch languages faster than translations complete. Each
/// request takes a ticket; when an older request finishes after a newer one
/// started, its ticket is stale and the outcome is discarded.
pub struct ResolutionTracker {
    generations: Mutex<HashMap<(String, Language), u64>>,
    counter: AtomicU64,
}

/// A claim on being the newest request for one (slug, language) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionTicket {
    slug: String,
    language: Language,
    generation: u64,
}

impl ResolutionTracker {
    pub fn new() -> Self {
        Self {
            generations: Mutex::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Register a new request, superseding any in-flight one for the same
    /// (slug, language).
    pub fn begin(&self, slug: &str, language: Language) -> ResolutionTicket {
        let generation = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let mut generations = self.generations.lock().unwrap();
        generations.insert((slug.to_string(), language), generation);
        ResolutionTicket {
            slug: slug.to_string(),
            language,
            generation,
        }
    }

    /// True while no newer request has been issued for the same pair.
    pub fn is_current(&self, ticket: &ResolutionTicket) -> bool {
        let generations = self.generations.lock().unwrap();
        generations
            .get(&(ticket.slug.clone(), ticket.language))
            .map(|latest| *latest == ticket.generation)
            .unwrap_or(false)
    }
}

impl Default for ResolutionTracker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TERM RESOLUTION SERVICE
// ============================================================================

pub struct TermResolutionService {
    event_bus: Arc<EventBus>,
    config: ResolverConfig,
    tracker: ResolutionTracker,
}

impl TermResolutionService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self::with_config(event_bus, ResolverConfig::default())
    }

    pub fn with_config(event_bus: Arc<EventBus>, config: ResolverConfig) -> Self {
        Self {
            event_bus,
            config,
            tracker: ResolutionTracker::new(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a term into the requested display language.
    ///
    /// Decision algorithm, in mandatory order:
    /// 1. Source language requested -> canonical content, no I/O.
    /// 2. Cache hit -> cached record verbatim, no I/O. Cache always wins;
    ///    a cached language is never re-translated.
    /// 3. Otherwise ask the provider. A non-null record is served as a live
    ///    translation; null or error degrades to the source language.
    ///
    /// Under the default configuration this never returns Err: the single
    /// failure class, translation-unavailable, is swallowed here and its
    /// only visible trace is `language_used` differing from the request.
    pub async fn resolve(
        &self,
        request: &ResolutionRequest,
        term: &Term,
        provider: &dyn TranslationProvider,
    ) -> AppResult<ResolutionResult> {
        let requested = request.requested_language;

        // Step 1: source language short-circuits before any translation attempt
        if requested.is_source() {
            let result = ResolutionResult::source(term);
            self.emit_resolved(request, &result, ResolutionPath::Source);
            return Ok(result);
        }

        // A language outside the deployment's configured set cannot be
        // translated; treat it as the same unavailable class
        if !self.config.languages.contains(requested) {
            return self.fallback(request, term, "language not in configured set");
        }

        // Step 2: cached translation wins over live translation
        if let Some(record) = term.cached_translation(requested) {
            log::debug!("Cache hit for '{}' in {}", term.slug, requested);
            let result = ResolutionResult::from_cache(requested, record);
            self.emit_resolved(request, &result, ResolutionPath::Cache);
            return Ok(result);
        }

        // Step 3: live translation
        match provider.translate(&term.slug, requested).await {
            Ok(Some(record)) if record.is_displayable() => {
                let result = ResolutionResult::live(requested, record);
                self.emit_resolved(request, &result, ResolutionPath::Live);
                Ok(result)
            }
            Ok(Some(_)) => self.fallback(request, term, "provider returned empty text"),
            Ok(None) => self.fallback(request, term, "provider returned null"),
            Err(e) => self.fallback(request, term, &e.to_string()),
        }
    }

    /// Resolve with last-request-wins semantics.
    ///
    /// Registers the request with the tracker before resolving. If a newer
    /// request for the same (slug, language) was issued while this one was
    /// in flight, the outcome is discarded and `Ok(None)` is returned; the
    /// caller simply keeps whatever the newest request produces.
    pub async fn resolve_latest(
        &self,
        request: &ResolutionRequest,
        term: &Term,
        provider: &dyn TranslationProvider,
    ) -> AppResult<Option<ResolutionResult>> {
        let ticket = self.tracker.begin(&request.term_slug, request.requested_language);

        let result = self.resolve(request, term, provider).await?;

        if !self.tracker.is_current(&ticket) {
            log::debug!(
                "Discarding stale resolution for '{}' in {}",
                request.term_slug,
                request.requested_language
            );
            return Ok(None);
        }

        Ok(Some(result))
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// The single failure class: translation unavailable.
    ///
    /// Silently degrades to the source language unless the deployment
    /// explicitly opted out of suppression.
    fn fallback(
        &self,
        request: &ResolutionRequest,
        term: &Term,
        reason: &str,
    ) -> AppResult<ResolutionResult> {
        log::warn!(
            "Translation unavailable for '{}' in {}: {}",
            term.slug,
            request.requested_language,
            reason
        );

        self.event_bus.emit(TranslationFallback::new(
            term.slug.clone(),
            request.requested_language.to_string(),
            reason.to_string(),
        ));

        if !self.config.suppress_translation_errors {
            return Err(AppError::TranslationUnavailable {
                slug: term.slug.clone(),
                language: request.requested_language.to_string(),
            });
        }

        let result = ResolutionResult::source(term);
        self.emit_resolved(request, &result, ResolutionPath::Fallback);
        Ok(result)
    }

    fn emit_resolved(
        &self,
        request: &ResolutionRequest,
        result: &ResolutionResult,
        path: ResolutionPath,
    ) {
        self.event_bus.emit(TermResolved::new(
            request.term_slug.clone(),
            request.requested_language.to_string(),
            result.language_used.to_string(),
            path.to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_newest_ticket_wins() {
        let tracker = ResolutionTracker::new();

        let first = tracker.begin("leadership", Language::Ar);
        assert!(tracker.is_current(&first));

        let second = tracker.begin("leadership", Language::Ar);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn test_tracker_pairs_are_independent() {
        let tracker = ResolutionTracker::new();

        let ar = tracker.begin("leadership", Language::Ar);
        let fa = tracker.begin("leadership", Language::Fa);
        let other = tracker.begin("empathy", Language::Ar);

        // A newer request for a different pair does not invalidate others
        assert!(tracker.is_current(&ar));
        assert!(tracker.is_current(&fa));
        assert!(tracker.is_current(&other));
    }

    #[test]
    fn test_default_config_suppresses_errors() {
        let config = ResolverConfig::default();
        assert!(config.suppress_translation_errors);
        assert!(config.languages.contains(Language::En));
    }
}
