//! # Search Module
//!
//! In-memory search over a fixed collection of items. Each item is mapped to
//! a string key once, at construction time, by a caller-supplied extractor.
//! Queries then match keys either exactly or by substring containment.
//!
//! ## Key Components
//!
//! - [`indexer`] - Index construction from items and a key extractor
//! - [`query`] - The [`SearchFn`] handle and match logic
//! - [`outputs`] - Result views and serializable output types
//! - [`config`] - Match modes, per-query options and defaults
//! - [`error`] - Construction errors
//!
//! ## Example
//!
//! ```
//! use searchable::make_searchable;
//!
//! let search = make_searchable(vec!["ab", "cd", "abcd", "a", "ef"], |s| s.to_string());
//!
//! assert_eq!(search.search("ab").len(), 1);
//! assert_eq!(search.search_substring("cd").to_vec(), vec![&"cd", &"abcd"]);
//! assert!(search.search("g").is_empty());
//! ```

pub mod config;
pub mod error;
pub mod indexer;
pub mod outputs;
pub mod query;

pub use config::{MatchMode, SearchOptions};
pub use error::ExtractionError;
pub use indexer::{SearchIndex, make_searchable, try_make_searchable};
pub use outputs::{SearchOutput, SearchResults};
pub use query::SearchFn;
