//! CLI command handlers, one per file.

mod dump;
mod load;

pub use dump::run_dump;
pub use load::run_load;
