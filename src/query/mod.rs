pub mod executor;
pub mod parser;

pub use executor::QueryExecutor;
pub use parser::{Query, parse_query};
