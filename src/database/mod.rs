/*!
 * Persistence layer for the translation cache.
 *
 * This module wraps SQLite access behind an async-friendly connection and a
 * repository with bulk lookup/upsert operations over the cache table.
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::DatabaseConnection;
pub use models::{CacheKey, CacheRecord};
pub use repository::CacheRepository;
