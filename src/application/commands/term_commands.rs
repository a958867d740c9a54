// src/application/commands/term_commands.rs
//
// Term Command Handlers
//
// RULES:
// - Accept DTOs
// - Call sealed services
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::domain::term::TermStatus;
use crate::services::{CreateTermRequest, UpdateTermRequest};

/// List terms, optionally filtered by editorial status
pub async fn list_terms(
    state: &AppState,
    status: Option<String>,
) -> Result<Vec<TermDto>, String> {
    let status = match status {
        Some(raw) => Some(
            TermStatus::parse(&raw).ok_or_else(|| format!("Invalid status: '{}'", raw))?,
        ),
        None => None,
    };

    let terms = state
        .term_service
        .list_terms(status)
        .map_err(|e| e.to_string())?;

    Ok(terms.into_iter().map(TermDto::from).collect())
}

/// Get a single term by slug
pub async fn get_term(state: &AppState, slug: String) -> Result<Option<TermDto>, String> {
    let term = state
        .term_service
        .get_term(&slug)
        .map_err(|e| e.to_string())?;

    Ok(term.map(TermDto::from))
}

/// Create a new draft term
pub async fn create_term(state: &AppState, dto: CreateTermDto) -> Result<TermDto, String> {
    let term = state
        .term_service
        .create_term(CreateTermRequest {
            slug: dto.slug,
            canonical_text: dto.canonical_text,
            canonical_definition: dto.canonical_definition,
        })
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Update canonical content
pub async fn update_term(state: &AppState, dto: UpdateTermDto) -> Result<TermDto, String> {
    let term = state
        .term_service
        .update_term(UpdateTermRequest {
            slug: dto.slug,
            canonical_text: dto.canonical_text,
            canonical_definition: dto.canonical_definition,
        })
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Submit a draft for review
pub async fn submit_for_review(state: &AppState, slug: String) -> Result<TermDto, String> {
    let term = state
        .term_service
        .submit_for_review(&slug)
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Publish a reviewed term
pub async fn publish_term(state: &AppState, slug: String) -> Result<TermDto, String> {
    let term = state
        .term_service
        .publish(&slug)
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Send a term under review back to draft
pub async fn reject_term(state: &AppState, slug: String) -> Result<TermDto, String> {
    let term = state
        .term_service
        .reject_to_draft(&slug)
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Delete an unpublished term
pub async fn delete_term(state: &AppState, slug: String) -> Result<(), String> {
    state
        .term_service
        .delete_term(&slug)
        .map_err(|e| e.to_string())
}
