// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::services::{
    ExportService, TermResolutionService, TermService, TranslationCacheService,
    TranslationProvider,
};

/// Shared application state.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub term_service: Arc<TermService>,
    pub translation_cache_service: Arc<TranslationCacheService>,
    pub resolution_service: Arc<TermResolutionService>,
    pub export_service: Arc<ExportService>,
    pub translation_provider: Arc<dyn TranslationProvider>,
}
