// src/main.rs
//
// LexiHub CLI
//
// Wires infrastructure -> repositories -> services -> application state,
// then dispatches one command. Each invocation is a complete request cycle
// against the local database.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use lexihub::application::commands::*;
use lexihub::application::state::AppState;
use lexihub::application::{CacheTranslationDto, CreateTermDto, UpdateTermDto};
use lexihub::db::{create_connection_pool, create_connection_pool_at, initialize_database};
use lexihub::domain::{Language, LanguageSet};
use lexihub::events::create_event_bus;
use lexihub::integrations::HttpTranslationClient;
use lexihub::repositories::{SqliteTermRepository, TermRepository};
use lexihub::services::{
    ExportService, ResolverConfig, TermResolutionService, TermService, TranslationCacheService,
    TranslationProvider,
};

const DEFAULT_TRANSLATOR_URL: &str = "https://translate.lexihub.local";

#[derive(Parser)]
#[command(name = "lexihub", version, about = "Local-first multilingual lexicon manager")]
struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Translation backend base URL
    #[arg(long, global = true, env = "LEXIHUB_TRANSLATOR_URL")]
    translator_url: Option<String>,

    /// Comma-separated language codes this deployment serves (source always included)
    #[arg(long, global = true, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Surface translation failures as errors instead of falling back to English
    #[arg(long, global = true)]
    strict_translations: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List terms, optionally filtered by status (draft, needs_review, published)
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Show a single term
    Show { slug: String },
    /// Create a new draft term
    Create {
        slug: String,
        text: String,
        definition: String,
    },
    /// Update canonical content of a term
    Update {
        slug: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        definition: Option<String>,
    },
    /// Submit a draft for editorial review
    Review { slug: String },
    /// Publish a reviewed term
    Publish { slug: String },
    /// Send a term under review back to draft
    Reject { slug: String },
    /// Delete an unpublished term
    Delete { slug: String },
    /// Resolve a published term into a display language
    Resolve { slug: String, language: String },
    /// Store a translation in a term's cache
    Cache {
        slug: String,
        language: String,
        text: String,
        #[arg(long)]
        definition: Option<String>,
    },
    /// Evict a cached translation
    Evict { slug: String, language: String },
    /// Export the published lexicon to CSV
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let state = build_state(&cli)?;
    run(cli.command, &state).await
}

fn build_state(cli: &Cli) -> Result<AppState> {
    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(create_event_bus());
    let pool = Arc::new(match &cli.database {
        Some(path) => create_connection_pool_at(path)?,
        None => create_connection_pool()?,
    });

    // Initialize schema (idempotent)
    {
        let conn = pool.get().context("Failed to get database connection")?;
        initialize_database(&conn)?;
    }

    // 2. REPOSITORIES
    let term_repo: Arc<dyn TermRepository> = Arc::new(SqliteTermRepository::new(pool));

    // 3. SERVICES
    let languages = match &cli.languages {
        Some(codes) => parse_language_set(codes)?,
        None => LanguageSet::full(),
    };
    let resolver_config = ResolverConfig {
        languages,
        suppress_translation_errors: !cli.strict_translations,
    };

    let term_service = Arc::new(TermService::new(term_repo.clone(), event_bus.clone()));
    let translation_cache_service = Arc::new(TranslationCacheService::new(
        term_repo.clone(),
        event_bus.clone(),
    ));
    let resolution_service = Arc::new(TermResolutionService::with_config(
        event_bus.clone(),
        resolver_config,
    ));
    let export_service = Arc::new(ExportService::new(term_repo, event_bus.clone()));

    let translator_url = cli
        .translator_url
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSLATOR_URL.to_string());
    let translation_provider: Arc<dyn TranslationProvider> =
        Arc::new(HttpTranslationClient::new(translator_url));

    // 4. APPLICATION STATE
    Ok(AppState {
        event_bus,
        term_service,
        translation_cache_service,
        resolution_service,
        export_service,
        translation_provider,
    })
}

fn parse_language_set(codes: &[String]) -> Result<LanguageSet> {
    let mut languages = Vec::with_capacity(codes.len());
    for code in codes {
        let language =
            Language::parse(code).ok_or_else(|| anyhow!("Unsupported language: '{}'", code))?;
        languages.push(language);
    }
    Ok(LanguageSet::new(&languages))
}

async fn run(command: Command, state: &AppState) -> Result<()> {
    match command {
        Command::List { status } => {
            let terms = list_terms(state, status).await.map_err(to_anyhow)?;
            print_json(&terms)
        }
        Command::Show { slug } => {
            let term = get_term(state, slug.clone())
                .await
                .map_err(to_anyhow)?
                .ok_or_else(|| anyhow!("Term '{}' not found", slug))?;
            print_json(&term)
        }
        Command::Create {
            slug,
            text,
            definition,
        } => {
            let term = create_term(
                state,
                CreateTermDto {
                    slug,
                    canonical_text: text,
                    canonical_definition: definition,
                },
            )
            .await
            .map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Update {
            slug,
            text,
            definition,
        } => {
            let term = update_term(
                state,
                UpdateTermDto {
                    slug,
                    canonical_text: text,
                    canonical_definition: definition,
                },
            )
            .await
            .map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Review { slug } => {
            let term = submit_for_review(state, slug).await.map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Publish { slug } => {
            let term = publish_term(state, slug).await.map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Reject { slug } => {
            let term = reject_term(state, slug).await.map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Delete { slug } => {
            delete_term(state, slug.clone()).await.map_err(to_anyhow)?;
            println!("Deleted '{}'", slug);
            Ok(())
        }
        Command::Resolve { slug, language } => {
            match resolve_term(state, slug, language).await.map_err(to_anyhow)? {
                Some(result) => print_json(&result),
                // Superseded by a newer request for the same pair
                None => Ok(()),
            }
        }
        Command::Cache {
            slug,
            language,
            text,
            definition,
        } => {
            let term = cache_translation(
                state,
                CacheTranslationDto {
                    slug,
                    language,
                    text,
                    definition,
                },
            )
            .await
            .map_err(to_anyhow)?;
            print_json(&term)
        }
        Command::Evict { slug, language } => {
            let removed = evict_translation(state, slug, language)
                .await
                .map_err(to_anyhow)?;
            println!("{}", if removed { "Evicted" } else { "Nothing cached" });
            Ok(())
        }
        Command::Export { path } => {
            let summary = export_lexicon(state, path.display().to_string())
                .await
                .map_err(to_anyhow)?;
            print_json(&summary)
        }
    }
}

fn to_anyhow(message: String) -> anyhow::Error {
    anyhow!(message)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
