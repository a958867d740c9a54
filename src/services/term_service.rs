// src/services/term_service.rs
//
// Term Service
//
// Editorial lifecycle of lexicon terms: authoring, review, publication.
//
// CRITICAL RULES:
// - Every mutation validates domain invariants before persisting
// - Slugs are unique; creation fails on a duplicate
// - Status transitions go through the entity, never raw field writes
// - Events are emitted after successful persistence, never before

use std::sync::Arc;

use crate::domain::term::{validate_slug, validate_term, Term, TermStatus};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, TermCreated, TermStatusChanged, TermUpdated};
use crate::repositories::TermRepository;

// ============================================================================
// REQUEST TYPES
// ============================================================================

#[derive(Debug, Clone)]
pub struct CreateTermRequest {
    pub slug: String,
    pub canonical_text: String,
    pub canonical_definition: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTermRequest {
    pub slug: String,
    pub canonical_text: Option<String>,
    pub canonical_definition: Option<String>,
}

// ============================================================================
// TERM SERVICE
// ============================================================================

pub struct TermService {
    repository: Arc<dyn TermRepository>,
    event_bus: Arc<EventBus>,
}

impl TermService {
    pub fn new(repository: Arc<dyn TermRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// Create a new draft term.
    pub fn create_term(&self, request: CreateTermRequest) -> AppResult<Term> {
        validate_slug(&request.slug)?;

        if self.repository.exists_slug(&request.slug)? {
            return Err(AppError::Other(format!(
                "A term with slug '{}' already exists",
                request.slug
            )));
        }

        let term = Term::new(
            request.slug,
            request.canonical_text,
            request.canonical_definition,
        );
        validate_term(&term)?;

        self.repository.save(&term)?;
        log::info!("Created term '{}' ({})", term.slug, term.id);

        self.event_bus
            .emit(TermCreated::new(term.id, term.slug.clone()));

        Ok(term)
    }

    /// Update canonical content of an existing term.
    /// Published content is frozen; edits require a new editorial cycle.
    pub fn update_term(&self, request: UpdateTermRequest) -> AppResult<Term> {
        let mut term = self.get_term_required(&request.slug)?;
        if term.is_published() {
            return Err(AppError::Other(format!(
                "Published term '{}' cannot be edited",
                request.slug
            )));
        }

        term.update_content(request.canonical_text, request.canonical_definition);
        validate_term(&term)?;

        self.repository.save(&term)?;
        self.event_bus.emit(TermUpdated::new(term.id));

        Ok(term)
    }

    /// Submit a draft for editorial review.
    pub fn submit_for_review(&self, slug: &str) -> AppResult<Term> {
        self.transition(slug, TermStatus::NeedsReview)
    }

    /// Publish a reviewed term. Publishing is final.
    pub fn publish(&self, slug: &str) -> AppResult<Term> {
        self.transition(slug, TermStatus::Published)
    }

    /// Send a term under review back to draft.
    pub fn reject_to_draft(&self, slug: &str) -> AppResult<Term> {
        self.transition(slug, TermStatus::Draft)
    }

    pub fn get_term(&self, slug: &str) -> AppResult<Option<Term>> {
        self.repository.get_by_slug(slug)
    }

    /// Load a term or fail; shared by every mutation path.
    pub fn get_term_required(&self, slug: &str) -> AppResult<Term> {
        self.repository
            .get_by_slug(slug)?
            .ok_or(AppError::NotFound)
    }

    pub fn list_terms(&self, status: Option<TermStatus>) -> AppResult<Vec<Term>> {
        match status {
            Some(status) => self.repository.list_by_status(status),
            None => self.repository.list_all(),
        }
    }

    pub fn delete_term(&self, slug: &str) -> AppResult<()> {
        let term = self.get_term_required(slug)?;
        if term.is_published() {
            return Err(AppError::Other(format!(
                "Published term '{}' cannot be deleted",
                slug
            )));
        }
        self.repository.delete(term.id)?;
        log::info!("Deleted term '{}'", slug);
        Ok(())
    }

    fn transition(&self, slug: &str, target: TermStatus) -> AppResult<Term> {
        let mut term = self.get_term_required(slug)?;
        let from = term.status;

        term.transition_to(target)?;
        self.repository.save(&term)?;

        log::info!("Term '{}' moved {} -> {}", slug, from, target);
        self.event_bus.emit(TermStatusChanged::new(
            term.id,
            term.slug.clone(),
            from.to_string(),
            target.to_string(),
        ));

        Ok(term)
    }
}
