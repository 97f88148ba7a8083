pub mod row;

pub use row::{LeaderboardRow, SearchField, Searchable, DEFAULT_SEARCH_FIELDS};
