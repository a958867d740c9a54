// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// TERM DOMAIN EVENTS
// ============================================================================

/// Emitted when a new Term entity is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_id: Uuid,
    pub slug: String,
}

impl TermCreated {
    pub fn new(term_id: Uuid, slug: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_id,
            slug,
        }
    }
}

impl DomainEvent for TermCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TermCreated" }
}

/// Emitted when a term's canonical content is updated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_id: Uuid,
}

impl TermUpdated {
    pub fn new(term_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_id,
        }
    }
}

impl DomainEvent for TermUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TermUpdated" }
}

/// Emitted when a term moves through its editorial lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermStatusChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_id: Uuid,
    pub slug: String,
    pub from_status: String, // "draft", "needs_review", "published"
    pub to_status: String,
}

impl TermStatusChanged {
    pub fn new(term_id: Uuid, slug: String, from_status: String, to_status: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_id,
            slug,
            from_status,
            to_status,
        }
    }
}

impl DomainEvent for TermStatusChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TermStatusChanged" }
}

// ============================================================================
// TRANSLATION CACHE EVENTS
// ============================================================================

/// Emitted when a translation is persisted into a term's cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationCached {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_id: Uuid,
    pub slug: String,
    pub language: String,
}

impl TranslationCached {
    pub fn new(term_id: Uuid, slug: String, language: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_id,
            slug,
            language,
        }
    }
}

impl DomainEvent for TranslationCached {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationCached" }
}

/// Emitted when a cached translation is removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationEvicted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_id: Uuid,
    pub slug: String,
    pub language: String,
}

impl TranslationEvicted {
    pub fn new(term_id: Uuid, slug: String, language: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_id,
            slug,
            language,
        }
    }
}

impl DomainEvent for TranslationEvicted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TranslationEvicted" }
}

// ============================================================================
// EXPORT EVENTS
// ============================================================================

/// Emitted when a glossary export completes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsExported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term_count: usize,
    pub language_count: usize,
}

impl TermsExported {
    pub fn new(term_count: usize, language_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term_count,
            language_count,
        }
    }
}

impl DomainEvent for TermsExported {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TermsExported" }
}
