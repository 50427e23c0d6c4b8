pub mod search;

pub use search::{
    ExtractionError, MatchMode, SearchFn, SearchIndex, SearchOptions, SearchOutput,
    SearchResults, make_searchable, try_make_searchable,
};
