// src/integrations/translator/client.rs
//
// Translation API Integration
//
// ARCHITECTURE:
// - HTTP client for the academy's translation backend
// - Handles rate limiting and timeouts
// - Maps loose external payloads -> TranslationRecord (NO domain mutation)
// - Used by TermResolutionService through the TranslationProvider trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly
// - "No translation" is Ok(None), never an error
// - Handles all external API concerns

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::domain::language::Language;
use crate::domain::translation::TranslationRecord;
use crate::error::{AppError, AppResult};
use crate::services::TranslationProvider;

/// Rate limiter state
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new() -> Self {
        Self {
            last_request: Instant::now() - Duration::from_secs(60),
            min_interval: Duration::from_millis(1000), // 1 request per second
        }
    }

    fn wait_if_needed(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            std::thread::sleep(wait_time);
        }
        self.last_request = Instant::now();
    }
}

/// Translation API client
pub struct HttpTranslationClient {
    base_url: String,
    http_client: Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    auth_token: Option<String>,
}

impl HttpTranslationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new())),
            auth_token: None,
        }
    }

    /// Create client with authentication token
    pub fn with_auth(base_url: impl Into<String>, token: String) -> Self {
        let mut client = Self::new(base_url);
        client.auth_token = Some(token);
        client
    }

    /// Pull the translation object out of a response body.
    ///
    /// The backend has shipped both a bare record and a {"translation": ...}
    /// wrapper; accept either. JSON null means no translation exists.
    fn extract_record(body: &serde_json::Value) -> Option<TranslationRecord> {
        if body.is_null() {
            return None;
        }
        if let Some(wrapped) = body.get("translation") {
            return TranslationRecord::from_raw(wrapped);
        }
        TranslationRecord::from_raw(body)
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationClient {
    async fn translate(
        &self,
        slug: &str,
        language: Language,
    ) -> AppResult<Option<TranslationRecord>> {
        // Rate limiting
        {
            let mut limiter = self.rate_limiter.lock().unwrap();
            limiter.wait_if_needed();
        }

        let body = json!({
            "slug": slug,
            "source": Language::SOURCE.code(),
            "target": language.code(),
        });

        let mut request = self
            .http_client
            .post(format!("{}/translate", self.base_url))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::TranslationService(format!("Request failed: {}", e)))?;

        // An unknown term/language pair is a normal miss, not a failure
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::TranslationService(format!(
                "Translation API returned status: {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::TranslationService(format!("Invalid response body: {}", e)))?;

        Ok(Self::extract_record(&payload))
    }
}
