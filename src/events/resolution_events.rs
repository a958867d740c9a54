// src/events/resolution_events.rs
//
// Resolution Events
//
// These events are the only observable side effect of term resolution.
//
// CRITICAL INVARIANTS:
// - All events are deterministic (no timestamps in event payload)
// - All events are immutable
// - All events are serializable
// - Event IDs are derived deterministically from fingerprints
// - occurred_at() returns SENTINEL_TIMESTAMP (Unix epoch) for trait compliance

use crate::events::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel timestamp for resolution events (Unix epoch).
/// Resolution events are deterministic and do not carry operational
/// timestamps. This constant satisfies the DomainEvent trait while
/// maintaining determinism.
const SENTINEL_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

// ============================================================================
// TERM RESOLVED EVENT
// ============================================================================

/// Emitted whenever a term is resolved into a display language.
///
/// DETERMINISM: No timestamp in payload. Identical resolution produces an
/// identical event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermResolved {
    /// Slug of the resolved term
    pub slug: String,

    /// The language the reader asked for
    pub requested_language: String,

    /// The language actually served
    pub language_used: String,

    /// Which branch produced the result (source, cache, live, fallback)
    pub path: String,

    /// Deterministic fingerprint for idempotency
    pub fingerprint: String,
}

impl TermResolved {
    pub fn new(
        slug: String,
        requested_language: String,
        language_used: String,
        path: String,
    ) -> Self {
        let fingerprint =
            Self::compute_fingerprint(&slug, &requested_language, &language_used, &path);
        Self {
            slug,
            requested_language,
            language_used,
            path,
            fingerprint,
        }
    }

    /// Compute deterministic fingerprint for idempotency.
    ///
    /// DETERMINISM COMPONENTS:
    /// - slug: exact string
    /// - requested_language / language_used: canonical codes
    /// - path: decision branch name
    fn compute_fingerprint(
        slug: &str,
        requested_language: &str,
        language_used: &str,
        path: &str,
    ) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        slug.hash(&mut hasher);
        requested_language.hash(&mut hasher);
        language_used.hash(&mut hasher);
        path.hash(&mut hasher);

        format!("res:{:016x}", hasher.finish())
    }
}

impl DomainEvent for TermResolved {
    fn event_id(&self) -> Uuid {
        // Deterministic event ID derived from fingerprint
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "TermResolved"
    }
}

// ============================================================================
// TRANSLATION FALLBACK EVENT
// ============================================================================

/// Emitted when a translation could not be obtained and the reader was
/// served the source language instead. This is the diagnostic trace of the
/// single "translation unavailable" failure class; the reader never sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationFallback {
    /// Slug of the term that fell back
    pub slug: String,

    /// The language that could not be served
    pub requested_language: String,

    /// Why, as reported by the provider boundary (null result, error text)
    pub reason: String,

    /// Deterministic fingerprint for idempotency
    pub fingerprint: String,
}

impl TranslationFallback {
    pub fn new(slug: String, requested_language: String, reason: String) -> Self {
        let fingerprint = Self::compute_fingerprint(&slug, &requested_language, &reason);
        Self {
            slug,
            requested_language,
            reason,
            fingerprint,
        }
    }

    fn compute_fingerprint(slug: &str, requested_language: &str, reason: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        slug.hash(&mut hasher);
        requested_language.hash(&mut hasher);
        reason.hash(&mut hasher);

        format!("fb:{:016x}", hasher.finish())
    }
}

impl DomainEvent for TranslationFallback {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "TranslationFallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_input_produces_identical_events() {
        let event1 = TermResolved::new(
            "leadership".to_string(),
            "ar".to_string(),
            "ar".to_string(),
            "cache".to_string(),
        );
        let event2 = TermResolved::new(
            "leadership".to_string(),
            "ar".to_string(),
            "ar".to_string(),
            "cache".to_string(),
        );

        assert_eq!(event1, event2);
        assert_eq!(event1.event_id(), event2.event_id());

        let json1 = serde_json::to_string(&event1).unwrap();
        let json2 = serde_json::to_string(&event2).unwrap();
        assert_eq!(json1, json2);
    }

    #[test]
    fn test_different_paths_produce_different_event_ids() {
        let cache = TermResolved::new(
            "leadership".to_string(),
            "ar".to_string(),
            "ar".to_string(),
            "cache".to_string(),
        );
        let live = TermResolved::new(
            "leadership".to_string(),
            "ar".to_string(),
            "ar".to_string(),
            "live".to_string(),
        );
        assert_ne!(cache.event_id(), live.event_id());
    }

    #[test]
    fn test_fallback_event_is_deterministic() {
        let event1 = TranslationFallback::new(
            "leadership".to_string(),
            "fa".to_string(),
            "provider returned null".to_string(),
        );
        let event2 = TranslationFallback::new(
            "leadership".to_string(),
            "fa".to_string(),
            "provider returned null".to_string(),
        );
        assert_eq!(event1.event_id(), event2.event_id());
    }
}
