//! Output types for search queries
//!
//! [`SearchResults`] is the value every query returns: a materialized list of
//! matching items that can be walked as often as needed. [`SearchOutput`]
//! wraps it with the query for callers that report results as JSON.

use serde::Serialize;

use crate::search::config::MatchMode;

/// Matches of a single query, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a, T> {
    mode: MatchMode,
    matches: Vec<&'a T>,
}

impl<'a, T> SearchResults<'a, T> {
    pub(crate) fn new(mode: MatchMode, matches: Vec<&'a T>) -> Self {
        Self { mode, matches }
    }

    /// Mode the query ran with
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a T> {
        self.matches.get(position).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a T> + '_ {
        self.matches.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<&'a T> {
        self.matches.clone()
    }

    pub fn into_vec(self) -> Vec<&'a T> {
        self.matches
    }

    /// Wrap these results with the query that produced them
    pub fn to_output(&self, query: impl Into<String>) -> SearchOutput<'a, T> {
        SearchOutput {
            query: query.into(),
            mode: self.mode,
            total_results: self.matches.len(),
            results: self.matches.clone(),
        }
    }
}

impl<'a, T> IntoIterator for SearchResults<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'r, 'a, T> IntoIterator for &'r SearchResults<'a, T> {
    type Item = &'a T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'r, &'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter().copied()
    }
}

/// Serializable report of a query and its matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutput<'a, T> {
    pub query: String,
    pub mode: MatchMode,
    pub total_results: usize,
    pub results: Vec<&'a T>,
}

impl<T: Serialize> SearchOutput<'_, T> {
    /// Convert to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize search output"}"#.to_string())
    }
}

impl<T> SearchOutput<'_, T> {
    /// Check if there are any results
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
