// src/services/export_service.rs
//
// Export Service
//
// Writes the published lexicon to CSV for translators and reviewers.
// One row per term, one column pair (text, definition) per non-source
// language in the configured set; uncached languages export as empty cells.

use std::path::Path;
use std::sync::Arc;

use crate::domain::language::LanguageSet;
use crate::domain::term::{Term, TermStatus};
use crate::error::AppResult;
use crate::events::{EventBus, TermsExported};
use crate::repositories::TermRepository;

pub struct ExportService {
    repository: Arc<dyn TermRepository>,
    event_bus: Arc<EventBus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub term_count: usize,
    pub language_count: usize,
}

impl ExportService {
    pub fn new(repository: Arc<dyn TermRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// Export all published terms to a CSV file.
    pub fn export_published(
        &self,
        path: &Path,
        languages: &LanguageSet,
    ) -> AppResult<ExportSummary> {
        let terms = self.repository.list_by_status(TermStatus::Published)?;

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(Self::header(languages))?;
        for term in &terms {
            writer.write_record(Self::row(term, languages))?;
        }
        writer.flush()?;

        let summary = ExportSummary {
            term_count: terms.len(),
            language_count: languages.non_source().count(),
        };
        log::info!(
            "Exported {} terms in {} languages to {}",
            summary.term_count,
            summary.language_count,
            path.display()
        );
        self.event_bus.emit(TermsExported::new(
            summary.term_count,
            summary.language_count,
        ));

        Ok(summary)
    }

    fn header(languages: &LanguageSet) -> Vec<String> {
        let mut header = vec![
            "slug".to_string(),
            "text_en".to_string(),
            "definition_en".to_string(),
        ];
        for language in languages.non_source() {
            header.push(format!("text_{}", language));
            header.push(format!("definition_{}", language));
        }
        header
    }

    fn row(term: &Term, languages: &LanguageSet) -> Vec<String> {
        let mut row = vec![
            term.slug.clone(),
            term.canonical_text.clone(),
            term.canonical_definition.clone(),
        ];
        for language in languages.non_source() {
            match term.cached_translation(language) {
                Some(record) => {
                    row.push(record.text.clone());
                    row.push(record.definition.clone());
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        row
    }
}
