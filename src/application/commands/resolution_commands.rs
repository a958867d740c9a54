// src/application/commands/resolution_commands.rs
//
// Resolution Command Handlers
//
// RULES:
// - Accept DTOs
// - Call sealed services
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::domain::language::Language;
use crate::domain::resolution::ResolutionRequest;
use crate::domain::translation::TranslationRecord;

/// Resolve a published term into a display language.
///
/// Overlapping requests for the same (slug, language) pair follow
/// last-request-wins; a superseded request returns Ok(None).
pub async fn resolve_term(
    state: &AppState,
    slug: String,
    language: String,
) -> Result<Option<ResolutionResultDto>, String> {
    let requested =
        Language::parse(&language).ok_or_else(|| format!("Unsupported language: '{}'", language))?;

    let term = state
        .term_service
        .get_term(&slug)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Term '{}' not found", slug))?;

    if !term.is_published() {
        return Err(format!("Term '{}' is not published", slug));
    }

    let request = ResolutionRequest::new(&slug, requested);
    let result = state
        .resolution_service
        .resolve_latest(&request, &term, state.translation_provider.as_ref())
        .await
        .map_err(|e| e.to_string())?;

    Ok(result.map(|r| ResolutionResultDto::from_result(&slug, requested.code(), r)))
}

/// Persist a translation into a term's cache
pub async fn cache_translation(
    state: &AppState,
    dto: CacheTranslationDto,
) -> Result<TermDto, String> {
    let language = Language::parse(&dto.language)
        .ok_or_else(|| format!("Unsupported language: '{}'", dto.language))?;

    let mut term = state
        .term_service
        .get_term_required(&dto.slug)
        .map_err(|e| e.to_string())?;

    let record = TranslationRecord::new(dto.text, dto.definition.unwrap_or_default());
    state
        .translation_cache_service
        .cache_translation(&mut term, language, record)
        .map_err(|e| e.to_string())?;

    Ok(TermDto::from(term))
}

/// Drop a cached translation so the next resolution goes live again
pub async fn evict_translation(
    state: &AppState,
    slug: String,
    language: String,
) -> Result<bool, String> {
    let language =
        Language::parse(&language).ok_or_else(|| format!("Unsupported language: '{}'", language))?;

    let mut term = state
        .term_service
        .get_term_required(&slug)
        .map_err(|e| e.to_string())?;

    state
        .translation_cache_service
        .evict_translation(&mut term, language)
        .map_err(|e| e.to_string())
}
