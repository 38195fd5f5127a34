/*!
 * # content-translator
 *
 * A Rust library for batch translation of platform content with
 * cache-through persistence.
 *
 * ## Features
 *
 * - Translate whole content entities (proposals) field by field
 * - Cache translations in SQLite, keyed by content key, text hash and
 *   target locale
 * - Implicit invalidation: edited text hashes differently, so stale
 *   translations are never served
 * - One batched provider call per translation pass
 * - DeepL API client with HTML tag handling
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `content_hash`: Truncated digest over source text
 * - `database`: SQLite cache store:
 *   - `database::connection`: Shared connection handling
 *   - `database::schema`: Schema creation and migration
 *   - `database::repository`: Bulk lookup and upsert operations
 * - `locales`: Platform locale to provider code mapping
 * - `translation`: Batch translation core:
 *   - `translation::batch`: Order-preserving cache-through translator
 *   - `translation::extractor`: Proposal field extraction and reassembly
 * - `providers`: Translation provider clients:
 *   - `providers::deepl`: DeepL API client
 *   - `providers::mock`: Mock client for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod content_hash;
pub mod database;
pub mod errors;
pub mod locales;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use content_hash::hash_content;
pub use database::{CacheKey, CacheRecord, CacheRepository};
pub use errors::{AppError, ProviderError, TranslationError};
pub use locales::LocaleMap;
pub use providers::{TranslationClient, TranslateOptions};
pub use translation::{BatchTranslator, ProposalTranslator, TranslatableEntry, TranslationResult};
