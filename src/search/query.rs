use std::sync::Arc;

use crate::search::config::{MatchMode, SearchOptions};
use crate::search::indexer::SearchIndex;
use crate::search::outputs::SearchResults;

/// Query handle bound to one [`SearchIndex`].
///
/// Cloning is cheap and every clone reads the same immutable index, so a
/// handle can be shared across threads or tasks without locking.
#[derive(Debug)]
pub struct SearchFn<T> {
    index: Arc<SearchIndex<T>>,
}

impl<T> Clone for SearchFn<T> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl<T> SearchFn<T> {
    pub fn new(index: SearchIndex<T>) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// Items whose key equals `query`, in input order
    pub fn search(&self, query: &str) -> SearchResults<'_, T> {
        self.search_mode(query, MatchMode::Exact)
    }

    /// Items whose key contains `query`, in input order.
    ///
    /// The empty query matches every item.
    pub fn search_substring(&self, query: &str) -> SearchResults<'_, T> {
        self.search_mode(query, MatchMode::Substring)
    }

    /// Query with a substring-mode flag; `false` is exact matching
    pub fn query(&self, query: &str, substring_mode: bool) -> SearchResults<'_, T> {
        self.search_mode(query, MatchMode::from(substring_mode))
    }

    pub fn search_mode(&self, query: &str, mode: MatchMode) -> SearchResults<'_, T> {
        self.search_with(
            query,
            &SearchOptions {
                mode,
                ..SearchOptions::default()
            },
        )
    }

    /// Perform a search with the given query and options
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchResults<'_, T> {
        let limit = options.limit.unwrap_or(usize::MAX);

        let matches: Vec<&T> = match options.mode {
            MatchMode::Exact => self
                .index
                .positions_for(query)
                .iter()
                .take(limit)
                .map(|&position| &self.index.entries()[position].item)
                .collect(),
            MatchMode::Substring => self
                .index
                .entries()
                .iter()
                .filter(|entry| options.mode.matches(&entry.key, query))
                .take(limit)
                .map(|entry| &entry.item)
                .collect(),
        };

        tracing::trace!(
            "Search for {:?} ({}) matched {} items",
            query,
            options.mode,
            matches.len()
        );

        SearchResults::new(options.mode, matches)
    }

    /// The index every clone of this handle reads
    pub fn index(&self) -> &SearchIndex<T> {
        &self.index
    }
}
