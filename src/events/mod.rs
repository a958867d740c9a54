// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod resolution_events;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Term lifecycle
    TermCreated,
    TermStatusChanged,
    TermUpdated,
    // Export
    TermsExported,
    // Translation cache
    TranslationCached,
    TranslationEvicted,
};

pub use bus::{EventBus, EventLogEntry};

// Resolution events
pub use resolution_events::{TermResolved, TranslationFallback};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
