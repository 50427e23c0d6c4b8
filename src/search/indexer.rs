use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::search::error::ExtractionError;
use crate::search::query::SearchFn;

/// A single indexed item together with its extracted key
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) key: String,
    pub(crate) item: T,
}

/// Immutable snapshot of `(key, item)` pairs built once from an item sequence.
///
/// Entries keep the input order. Exact lookups go through `by_key`, which maps
/// each distinct key to the ascending positions of the entries carrying it;
/// substring lookups scan `entries`.
#[derive(Debug)]
pub struct SearchIndex<T> {
    entries: Vec<Entry<T>>,
    by_key: FxHashMap<String, Vec<usize>>,
}

impl<T> SearchIndex<T> {
    /// Build an index, calling `key_of` once per item in input order.
    ///
    /// Stops at the first extractor failure and reports the item's position.
    pub fn try_build<I, F, K, E>(items: I, mut key_of: F) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Result<K, E>,
        K: Into<String>,
        E: Into<anyhow::Error>,
    {
        let items = items.into_iter();
        let mut entries = Vec::with_capacity(items.size_hint().0);

        for (index, item) in items.enumerate() {
            match key_of(&item) {
                Ok(key) => entries.push(Entry {
                    key: key.into(),
                    item,
                }),
                Err(e) => {
                    let e: anyhow::Error = e.into();
                    tracing::warn!(
                        "Search index construction aborted at item {}: {:#}",
                        index,
                        e
                    );
                    return Err(ExtractionError::new(index, e));
                }
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// Build an index with an extractor that cannot fail
    pub fn build<I, F, K>(items: I, mut key_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
        K: Into<String>,
    {
        let entries = items
            .into_iter()
            .map(|item| Entry {
                key: key_of(&item).into(),
                item,
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<Entry<T>>) -> Self {
        let mut by_key: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, entry) in entries.iter().enumerate() {
            by_key.entry(entry.key.clone()).or_default().push(position);
        }

        tracing::debug!(
            "Built search index with {} items and {} distinct keys",
            entries.len(),
            by_key.len()
        );

        Self { entries, by_key }
    }

    pub(crate) fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Ascending positions of entries whose key equals `key`
    pub(crate) fn positions_for(&self, key: &str) -> &[usize] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of indexed items, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys
    pub fn distinct_keys(&self) -> usize {
        self.by_key.len()
    }

    /// Extracted keys in input order, duplicates included
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Items in input order
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.item)
    }

    /// Get statistics about the index
    pub fn get_stats(&self) -> HashMap<String, serde_json::Value> {
        let mut stats = HashMap::new();
        stats.insert(
            "total_items".to_string(),
            serde_json::Value::Number(self.len().into()),
        );
        stats.insert(
            "distinct_keys".to_string(),
            serde_json::Value::Number(self.distinct_keys().into()),
        );
        stats
    }
}

/// Build a [`SearchFn`] over `items`, keyed by `key_of`.
///
/// `key_of` is called exactly once per item. The returned handle owns its
/// snapshot, so the caller's arguments can be dropped afterwards.
pub fn make_searchable<T, I, F, K>(items: I, key_of: F) -> SearchFn<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    K: Into<String>,
{
    SearchFn::new(SearchIndex::build(items, key_of))
}

/// Like [`make_searchable`], for extractors that can fail.
///
/// The first failing item aborts construction with an [`ExtractionError`]
/// carrying its position.
pub fn try_make_searchable<T, I, F, K, E>(
    items: I,
    key_of: F,
) -> Result<SearchFn<T>, ExtractionError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<K, E>,
    K: Into<String>,
    E: Into<anyhow::Error>,
{
    SearchIndex::try_build(items, key_of).map(SearchFn::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keeps_input_order_and_duplicates() {
        let index = SearchIndex::build(vec!["b", "a", "b"], |s| s.to_string());
        assert_eq!(index.len(), 3);
        assert_eq!(index.distinct_keys(), 2);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(index.positions_for("b"), &[0, 2]);
        assert_eq!(index.positions_for("a"), &[1]);
        assert!(index.positions_for("c").is_empty());
    }

    #[test]
    fn test_extractor_called_once_per_item() {
        let mut calls = 0;
        let index = SearchIndex::build(1..=4, |n: &i32| {
            calls += 1;
            n.to_string()
        });
        assert_eq!(calls, 4);
        assert_eq!(index.items().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_try_build_stops_at_first_failure() {
        let mut visited = Vec::new();
        let err = SearchIndex::try_build(vec!["ok", "bad", "also bad"], |s| {
            visited.push(*s);
            if s.contains("bad") {
                Err(anyhow::anyhow!("cannot key {s}"))
            } else {
                Ok(s.to_string())
            }
        })
        .unwrap_err();

        assert_eq!(err.index(), 1);
        assert_eq!(visited, vec!["ok", "bad"]);
        assert_eq!(err.into_source().to_string(), "cannot key bad");
    }

    #[test]
    fn test_try_build_accepts_std_errors() {
        let err = SearchIndex::try_build(vec!["1", "x"], |s| {
            s.parse::<u32>().map(|n| n.to_string())
        })
        .unwrap_err();
        assert_eq!(err.index(), 1);
        assert!(err.into_source().downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::build(Vec::<String>::new(), |s| s.clone());
        assert!(index.is_empty());
        assert_eq!(index.distinct_keys(), 0);
    }

    #[test]
    fn test_get_stats() {
        let index = SearchIndex::build(vec!["a", "a", "b"], |s| *s);
        let stats = index.get_stats();
        assert_eq!(stats["total_items"], serde_json::json!(3));
        assert_eq!(stats["distinct_keys"], serde_json::json!(2));
    }
}
