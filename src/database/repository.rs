/*!
 * Repository layer for the translation cache table.
 *
 * Both operations are bulk by contract: one entity translation touches dozens
 * of fragments, and the batch translator bounds its round trips to a single
 * read and a single write regardless of batch size.
 */

use anyhow::Result;
use log::debug;
use rusqlite::params_from_iter;
use std::collections::HashMap;

use super::connection::DatabaseConnection;
use super::models::{CacheKey, CacheRecord};

/// Repository for translation cache operations
#[derive(Clone)]
pub struct CacheRepository {
    /// Database connection
    db: DatabaseConnection,
}

impl CacheRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Look up cached translations for a set of composite keys in one query.
    ///
    /// Runs a single OR-of-ANDs predicate over (content_key, content_hash)
    /// pairs scoped to the target locale. Rows that do not exist are simply
    /// absent from the returned map - misses, not errors. An empty key list
    /// returns an empty map without touching the database.
    pub async fn lookup_many(
        &self,
        keys: &[CacheKey],
        target_locale: &str,
    ) -> Result<HashMap<CacheKey, CacheRecord>> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let keys = keys.to_vec();
        let target_locale = target_locale.to_string();

        self.db
            .execute_async(move |conn| {
                let mut sql = String::from(
                    "SELECT content_key, content_hash, target_locale, source_locale, translated_text, updated_at \
                     FROM translation_cache WHERE target_locale = ? AND (",
                );
                let clauses: Vec<&str> = keys
                    .iter()
                    .map(|_| "(content_key = ? AND content_hash = ?)")
                    .collect();
                sql.push_str(&clauses.join(" OR "));
                sql.push(')');

                let mut values: Vec<String> = Vec::with_capacity(1 + keys.len() * 2);
                values.push(target_locale);
                for key in &keys {
                    values.push(key.content_key.clone());
                    values.push(key.content_hash.clone());
                }

                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
                    Ok(CacheRecord {
                        content_key: row.get(0)?,
                        content_hash: row.get(1)?,
                        target_locale: row.get(2)?,
                        source_locale: row.get(3)?,
                        translated_text: row.get(4)?,
                        updated_at: row.get(5)?,
                    })
                })?;

                let mut found = HashMap::new();
                for row in rows {
                    let record = row?;
                    found.insert(record.key(), record);
                }

                debug!("Cache lookup: {} hits of {} keys", found.len(), keys.len());
                Ok(found)
            })
            .await
    }

    /// Insert or update cache records in a single transaction.
    ///
    /// On conflict over (content_key, content_hash, target_locale) the
    /// translated text and source locale are overwritten and updated_at is
    /// bumped - last write wins, which makes concurrent writes of the same
    /// triple safe. An empty list issues no write statement at all.
    pub async fn upsert_many(&self, records: Vec<CacheRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let count = records.len();
        self.db
            .transaction_async(move |tx| {
                let mut stmt = tx.prepare(
                    r#"
                    INSERT INTO translation_cache (
                        content_key, content_hash, target_locale,
                        source_locale, translated_text, updated_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    ON CONFLICT(content_key, content_hash, target_locale) DO UPDATE SET
                        translated_text = excluded.translated_text,
                        source_locale = excluded.source_locale,
                        updated_at = excluded.updated_at
                    "#,
                )?;

                for record in &records {
                    stmt.execute(rusqlite::params![
                        record.content_key,
                        record.content_hash,
                        record.target_locale,
                        record.source_locale,
                        record.translated_text,
                        record.updated_at,
                    ])?;
                }
                Ok(())
            })
            .await?;

        debug!("Cache write-through: {} records upserted", count);
        Ok(())
    }

    /// Number of rows in the cache table
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM translation_cache", [], |row| {
                        row.get(0)
                    })?;
                Ok(count)
            })
            .await
    }

    /// Delete every row in the cache table, returning the number removed.
    ///
    /// The core never calls this; it exists for external maintenance and
    /// tests. Stale-hash rows otherwise accumulate indefinitely.
    pub async fn clear(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let deleted = conn.execute("DELETE FROM translation_cache", [])?;
                Ok(deleted as i64)
            })
            .await
    }
}
