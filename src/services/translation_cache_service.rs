// src/services/translation_cache_service.rs
//
// Translation Cache Service
//
// Write-back side of the translation cache. The resolver reads the cache;
// this service is the only place that mutates it.
//
// CRITICAL RULES:
// - The cache never holds the source language or an empty translation
//   (enforced by the entity, re-checked by validation)
// - Caching a language that is already cached replaces the record
// - Eviction of an uncached language is a no-op, not an error

use std::sync::Arc;

use crate::domain::language::Language;
use crate::domain::term::{validate_term, Term};
use crate::domain::translation::TranslationRecord;
use crate::error::AppResult;
use crate::events::{EventBus, TranslationCached, TranslationEvicted};
use crate::repositories::TermRepository;

pub struct TranslationCacheService {
    repository: Arc<dyn TermRepository>,
    event_bus: Arc<EventBus>,
}

impl TranslationCacheService {
    pub fn new(repository: Arc<dyn TermRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// Persist a translation into a term's cache.
    ///
    /// Once cached, the language is served from the cache on every future
    /// resolution and never re-translated until evicted.
    pub fn cache_translation(
        &self,
        term: &mut Term,
        language: Language,
        record: TranslationRecord,
    ) -> AppResult<()> {
        term.cache_translation(language, record)?;
        validate_term(term)?;
        self.repository.save(term)?;

        log::info!("Cached {} translation for '{}'", language, term.slug);
        self.event_bus.emit(TranslationCached::new(
            term.id,
            term.slug.clone(),
            language.to_string(),
        ));

        Ok(())
    }

    /// Drop a cached translation so the next resolution goes live again.
    /// Returns true when an entry was actually removed.
    pub fn evict_translation(&self, term: &mut Term, language: Language) -> AppResult<bool> {
        if term.evict_translation(language).is_none() {
            return Ok(false);
        }
        self.repository.save(term)?;

        log::info!("Evicted {} translation for '{}'", language, term.slug);
        self.event_bus.emit(TranslationEvicted::new(
            term.id,
            term.slug.clone(),
            language.to_string(),
        ));

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_pool;
    use crate::db::initialize_database;
    use crate::events::create_event_bus;
    use crate::repositories::SqliteTermRepository;

    fn setup() -> (TranslationCacheService, Arc<dyn TermRepository>, Term) {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        let repository: Arc<dyn TermRepository> = Arc::new(SqliteTermRepository::new(pool));
        let service =
            TranslationCacheService::new(Arc::clone(&repository), Arc::new(create_event_bus()));

        let term = Term::new(
            "leadership".to_string(),
            "Leadership".to_string(),
            "The act of guiding others.".to_string(),
        );
        repository.save(&term).unwrap();

        (service, repository, term)
    }

    #[test]
    fn test_cache_translation_persists() {
        let (service, repository, mut term) = setup();

        service
            .cache_translation(
                &mut term,
                Language::Ar,
                TranslationRecord::new("القيادة".to_string(), "تعريف".to_string()),
            )
            .unwrap();

        let stored = repository.get_by_slug("leadership").unwrap().unwrap();
        assert_eq!(
            stored.cached_translation(Language::Ar).unwrap().text,
            "القيادة"
        );
    }

    #[test]
    fn test_cache_replaces_existing_entry() {
        let (service, repository, mut term) = setup();

        service
            .cache_translation(
                &mut term,
                Language::Es,
                TranslationRecord::new("Mando".to_string(), String::new()),
            )
            .unwrap();
        service
            .cache_translation(
                &mut term,
                Language::Es,
                TranslationRecord::new("Liderazgo".to_string(), String::new()),
            )
            .unwrap();

        let stored = repository.get_by_slug("leadership").unwrap().unwrap();
        assert_eq!(stored.cached_translations.len(), 1);
        assert_eq!(
            stored.cached_translation(Language::Es).unwrap().text,
            "Liderazgo"
        );
    }

    #[test]
    fn test_cache_rejects_source_language() {
        let (service, _, mut term) = setup();
        let result = service.cache_translation(
            &mut term,
            Language::En,
            TranslationRecord::new("Leadership".to_string(), String::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_evict_translation() {
        let (service, repository, mut term) = setup();

        service
            .cache_translation(
                &mut term,
                Language::Fa,
                TranslationRecord::new("رهبری".to_string(), String::new()),
            )
            .unwrap();

        assert!(service.evict_translation(&mut term, Language::Fa).unwrap());
        assert!(!service.evict_translation(&mut term, Language::Fa).unwrap());

        let stored = repository.get_by_slug("leadership").unwrap().unwrap();
        assert!(stored.cached_translation(Language::Fa).is_none());
    }
}
