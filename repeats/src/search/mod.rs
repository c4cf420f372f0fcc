pub mod automaton;
pub mod driver;

pub use automaton::{single_search, SearchParams, SearchResult};
pub use driver::{Hit, RepeatsSearch};
