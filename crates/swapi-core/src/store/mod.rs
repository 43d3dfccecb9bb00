//! Characters table (SQLite via sqlx).
//!
//! INSERT-only writes, one transaction per record, plus the full-table scan
//! used by `swapi dump`.

mod characters;
mod db;
mod error;
mod row;

pub use db::{default_db_path, CharacterStore};
pub use error::StoreError;
pub use row::{DumpRow, DumpValue};

#[cfg(test)]
pub(crate) use db::open_memory;
