// src/application/commands/export_commands.rs
//
// Export Command Handlers

use std::path::PathBuf;

use crate::application::{dto::ExportSummaryDto, state::AppState};

/// Export the published lexicon to a CSV file
pub async fn export_lexicon(state: &AppState, path: String) -> Result<ExportSummaryDto, String> {
    let path = PathBuf::from(path);
    let languages = state.resolution_service.config().languages.clone();

    let summary = state
        .export_service
        .export_published(&path, &languages)
        .map_err(|e| e.to_string())?;

    Ok(ExportSummaryDto {
        path: path.display().to_string(),
        term_count: summary.term_count,
        language_count: summary.language_count,
    })
}
