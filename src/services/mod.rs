// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod export_service;
pub mod resolution_service;
pub mod term_service;
pub mod translation_cache_service;

#[cfg(test)]
mod resolution_service_tests;

#[cfg(test)]
mod resolution_service_hardening_tests;

// Re-export all services and their types
pub use term_service::{
    TermService,
    CreateTermRequest,
    UpdateTermRequest,
};

pub use translation_cache_service::{
    TranslationCacheService,
};

pub use export_service::{
    ExportService,
    ExportSummary,
};

pub use resolution_service::{
    TermResolutionService,
    TranslationProvider,
    ResolverConfig,
    ResolutionTracker,
    ResolutionTicket,
};

#[cfg(test)]
pub use resolution_service::MockTranslationProvider;
