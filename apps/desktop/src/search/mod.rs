//! Search input bound to the browser query.

mod search_input;

pub use search_input::SearchInput;
