//! ETL driver: count, then fetch → build → insert for ids `1..=count`.
//!
//! Strictly sequential. A "not found" sentinel skips the id; any other error
//! aborts the run with no checkpoint, so a rerun starts again from id 1.

mod driver;
mod error;
mod sentinel;
mod urls;

pub use driver::{run_pipeline, Pipeline, PipelineSummary, Step};
pub use error::PipelineError;
pub use sentinel::is_not_found;
pub use urls::Endpoints;
