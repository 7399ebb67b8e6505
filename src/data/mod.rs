mod json_provider;

pub use json_provider::{DEFAULT_FETCH_TIMEOUT, JsonDataProvider, decode_bars};

use crate::core::Bar;

/// Source of ordered bar datasets.
///
/// An empty result is the uniform failure signal: implementations report
/// the underlying cause out of band (logging) instead of propagating it,
/// and callers render their explicit empty state.
pub trait DataProvider {
    fn fetch_bars(&self) -> Vec<Bar>;
}
