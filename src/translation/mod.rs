/*!
 * Batch content translation with cache-through semantics.
 *
 * This module contains the orchestration core and the per-entity adapter:
 *
 * - `batch`: hash, bulk cache lookup, provider dispatch for misses,
 *   write-through, order-preserving merge
 * - `extractor`: maps a proposal's fields into generic translatable entries
 *   and maps results back into a field-keyed structure
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, TranslatableEntry, TranslationResult};
pub use self::extractor::{Proposal, ProposalTranslation, ProposalTranslator};

// Submodules
pub mod batch;
pub mod extractor;
