pub mod context;
pub mod domain;
pub mod dto;
pub mod error;
pub mod query;

pub use context::FilterContext;
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use query::{evaluate, parse_query, EmptyTermPolicy, QueryFilter, SearchExpr};
