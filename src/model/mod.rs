pub mod graph;
pub mod transaction;
