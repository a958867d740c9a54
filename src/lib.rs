// src/lib.rs
// LexiHub - Local-first multilingual lexicon manager
//
// Architecture:
// - Domain-centric: All business logic lives in domains
// - Event-driven: Services coordinate through events
// - Explicit: No implicit behavior, no ambient language state
// - Local-first: User controls all data
// - Application Layer: CLI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_slug,
    validate_term,
    // Language
    Language,
    LanguageSet,
    // Resolution
    ResolutionPath,
    ResolutionRequest,
    ResolutionResult,
    // Term
    Term,
    TermStatus,
    // Translation
    TranslationRecord,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    TermCreated,
    TermResolved,
    TermsExported,
    TermStatusChanged,
    TermUpdated,
    TranslationCached,
    TranslationEvicted,
    TranslationFallback,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{SqliteTermRepository, TermRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CreateTermRequest,
    ExportService,
    ExportSummary,
    ResolverConfig,
    TermResolutionService,
    TermService,
    TranslationCacheService,
    TranslationProvider,
    UpdateTermRequest,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::HttpTranslationClient;
