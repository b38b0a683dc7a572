// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod answer;
pub mod config;
pub mod llm;
pub mod predict;
pub mod query;
pub mod server;
pub mod stats;
