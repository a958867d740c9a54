// src/repositories/term_repository.rs
//
// Term persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{Language, Term, TermStatus, TranslationRecord};
use crate::error::{AppError, AppResult};

pub trait TermRepository: Send + Sync {
    fn save(&self, term: &Term) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Term>>;
    fn get_by_slug(&self, slug: &str) -> AppResult<Option<Term>>;
    fn list_all(&self) -> AppResult<Vec<Term>>;
    fn list_by_status(&self, status: TermStatus) -> AppResult<Vec<Term>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn exists_slug(&self, slug: &str) -> AppResult<bool>;
}

pub struct SqliteTermRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTermRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Term - returns rusqlite::Error for query_map compatibility
    fn row_to_term(row: &Row) -> Result<Term, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let slug: String = row.get("slug")?;
        let canonical_text: String = row.get("canonical_text")?;
        let canonical_definition: String = row.get("canonical_definition")?;

        let translations_json: String = row.get("cached_translations")?;
        let cached_translations = Self::parse_translations(&translations_json)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let status_str: String = row.get("status")?;
        let status = TermStatus::parse(&status_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let created_at_str: String = row.get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let updated_at_str: String = row.get("updated_at")?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Term {
            id,
            slug,
            canonical_text,
            canonical_definition,
            cached_translations,
            status,
            created_at,
            updated_at,
        })
    }

    /// Decode the stored JSON object into the typed cache map.
    ///
    /// Stored blobs may predate the normalized record shape, so each value
    /// goes through TranslationRecord::from_raw. Entries that cannot be
    /// normalized (unknown language, unusable payload) are dropped rather
    /// than failing the whole row.
    fn parse_translations(
        json: &str,
    ) -> Result<BTreeMap<Language, TranslationRecord>, serde_json::Error> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut cache = BTreeMap::new();
        for (code, value) in raw {
            let Some(language) = Language::parse(&code) else {
                log::warn!("Dropping cached translation with unknown language '{}'", code);
                continue;
            };
            if language.is_source() {
                log::warn!("Dropping source-language entry found in stored cache");
                continue;
            }
            if let Some(record) = TranslationRecord::from_raw(&value) {
                cache.insert(language, record);
            } else {
                log::warn!("Dropping unusable cached translation for '{}'", code);
            }
        }
        Ok(cache)
    }

    fn translations_to_json(term: &Term) -> AppResult<String> {
        let mut map = serde_json::Map::new();
        for (language, record) in &term.cached_translations {
            map.insert(language.code().to_string(), serde_json::to_value(record)?);
        }
        Ok(serde_json::Value::Object(map).to_string())
    }
}

impl TermRepository for SqliteTermRepository {
    fn save(&self, term: &Term) -> AppResult<()> {
        let conn = self.pool.get()?;

        let translations_json = Self::translations_to_json(term)?;

        conn.execute(
            "INSERT OR REPLACE INTO terms (
                id, slug, canonical_text, canonical_definition,
                cached_translations, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                term.id.to_string(),
                term.slug,
                term.canonical_text,
                term.canonical_definition,
                translations_json,
                term.status.to_string(),
                term.created_at.to_rfc3339(),
                term.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Term>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, slug, canonical_text, canonical_definition,
                    cached_translations, status, created_at, updated_at
             FROM terms WHERE id = ?1",
        )?;

        match stmt.query_row(params![id.to_string()], Self::row_to_term) {
            Ok(term) => Ok(Some(term)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_slug(&self, slug: &str) -> AppResult<Option<Term>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, slug, canonical_text, canonical_definition,
                    cached_translations, status, created_at, updated_at
             FROM terms WHERE slug = ?1",
        )?;

        match stmt.query_row(params![slug], Self::row_to_term) {
            Ok(term) => Ok(Some(term)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Term>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, slug, canonical_text, canonical_definition,
                    cached_translations, status, created_at, updated_at
             FROM terms
             ORDER BY slug",
        )?;

        let terms: Vec<Term> = stmt
            .query_map([], Self::row_to_term)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(terms)
    }

    fn list_by_status(&self, status: TermStatus) -> AppResult<Vec<Term>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, slug, canonical_text, canonical_definition,
                    cached_translations, status, created_at, updated_at
             FROM terms
             WHERE status = ?1
             ORDER BY slug",
        )?;

        let terms: Vec<Term> = stmt
            .query_map(params![status.to_string()], Self::row_to_term)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(terms)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM terms WHERE id = ?1", params![id.to_string()])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn exists_slug(&self, slug: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM terms WHERE slug = ?1",
            params![slug],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
