pub mod config;
pub mod logging;

pub mod fetch;
pub mod pipeline;
pub mod record;
pub mod store;
