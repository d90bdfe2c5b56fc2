/// Collection aggregation operations.
pub mod aggregation;
/// Core collection implementation.
pub mod coll;
/// Collection mutating operations.
pub mod operations;
/// Collection lookup and filter operations.
pub mod query;

pub use coll::*;
