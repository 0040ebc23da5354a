//! Weighted prefix autocomplete over a sorted, in-memory term store.
//!
//! Give it `(term, weight)` pairs once, then ask for every term starting with a
//! typed prefix, heaviest first. Matching is exact-prefix and case-sensitive;
//! the store never changes after it is built.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   load/     │────▶│  store.rs    │────▶│  search/range.rs │
//! │ (text, json)│     │ (TermStore,  │     │ (lowest_match,   │
//! │             │     │  sorted)     │     │  highest_match)  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!                                                   ▼
//!                     ┌──────────────┐     ┌──────────────────┐
//!                     │ Suggestions  │◀────│  search/query.rs │
//!                     │ (by weight)  │     │  scoring/ranking │
//!                     └──────────────┘     └──────────────────┘
//! ```
//!
//! # Cost
//!
//! | Step                | Cost                         |
//! |---------------------|------------------------------|
//! | `TermStore::new`    | O(n log n), once             |
//! | `lowest_match`      | O(log n · \|prefix\|)        |
//! | `highest_match`     | O(log n · \|prefix\|)        |
//! | `query`             | above + O(m log m), m matches |
//!
//! # Usage
//!
//! ```ignore
//! use autosuggest::{query, TermEntry, TermStore};
//!
//! let store = TermStore::new(vec![
//!     TermEntry::new("Boston", 10.0),
//!     TermEntry::new("Bombay", 5.0),
//!     TermEntry::new("Bogota", 20.0),
//! ]);
//!
//! let found = query(store.entries(), "Bo")?;
//! // Bogota (20), Boston (10), Bombay (5)
//! ```

// Module declarations
pub mod load;
pub mod scoring;
pub mod search;
mod store;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use load::{read_any, read_terms, LoadError, LoadOptions};
pub use scoring::{compare_by_weight_desc, rank_by_weight};
pub use search::{highest_match, lowest_match, match_range, query, QueryError};
pub use store::TermStore;
pub use types::{MatchRange, Suggestions, TermEntry};
pub use verify::{is_sorted_by_term, InvariantError};
