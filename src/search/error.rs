use thiserror::Error;

/// Returned when the key extractor fails while an index is being built.
///
/// Construction stops at the first failure, so no index exists afterwards.
#[derive(Debug, Error)]
#[error("failed to extract search key for item at index {index}")]
pub struct ExtractionError {
    index: usize,
    #[source]
    source: anyhow::Error,
}

impl ExtractionError {
    pub(crate) fn new(index: usize, source: impl Into<anyhow::Error>) -> Self {
        Self {
            index,
            source: source.into(),
        }
    }

    /// Position of the offending item in the input sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// The extractor's own error
    pub fn into_source(self) -> anyhow::Error {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_reports_index_and_source() {
        let err = ExtractionError::new(1, anyhow::anyhow!("no name"));
        assert_eq!(err.index(), 1);
        assert_eq!(
            err.to_string(),
            "failed to extract search key for item at index 1"
        );
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("no name"));
        assert_eq!(err.into_source().to_string(), "no name");
    }
}
