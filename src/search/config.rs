//! # Search Configuration Module
//!
//! Provides match modes, per-query options and their defaults.
//!
//! Options are plain data so host applications can accept them from JSON
//! alongside their own configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Match mode used when a query does not specify one
pub const DEFAULT_MATCH_MODE: MatchMode = MatchMode::Exact;

/// Default cap on returned matches (`None` returns every match)
pub const DEFAULT_SEARCH_LIMIT: Option<usize> = None;

/// How a query string is compared against item keys.
///
/// Both modes compare bytes as stored; there is no case folding, trimming or
/// Unicode normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Key must equal the query
    #[default]
    Exact,
    /// Query must occur anywhere within the key
    Substring,
}

impl MatchMode {
    /// Whether `key` satisfies `query` under this mode
    pub fn matches(self, key: &str, query: &str) -> bool {
        match self {
            MatchMode::Exact => key == query,
            MatchMode::Substring => key.contains(query),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Substring => "substring",
        }
    }
}

impl From<bool> for MatchMode {
    /// Maps a substring-mode flag onto a mode: `true` selects substring matching.
    fn from(substring_mode: bool) -> Self {
        if substring_mode {
            MatchMode::Substring
        } else {
            MatchMode::Exact
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchOptions {
    #[schemars(description = "Match mode: exact key equality or substring containment")]
    #[serde(default)]
    pub mode: MatchMode,
    #[schemars(description = "Maximum number of results to return, in input order")]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MATCH_MODE,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn substring() -> Self {
        Self {
            mode: MatchMode::Substring,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
