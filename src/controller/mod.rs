//! Headless interaction controllers
//!
//! Everything here is plain state driven by explicit instants and applied
//! responses, so the whole interaction contract is unit-testable without a
//! terminal or a live backend.

mod autocomplete;
mod debounce;
mod recommend;
mod visualize;

pub use autocomplete::{SearchBox, SuggestionFetch};
pub use debounce::Debouncer;
pub use recommend::{
    similarity_percent, ResultsPane, ResultsState, EMPTY_QUERY_MESSAGE, FETCH_ERROR_MESSAGE,
};
pub use visualize::{
    build_charts, ChartKind, ChartSpec, ChartsPane, ChartsState, VIZ_ERROR_MESSAGE,
};
