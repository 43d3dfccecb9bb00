//! Character record flattening.
//!
//! Turns one raw SWAPI character object plus its URL into a flat
//! `CharacterRecord`: id from the URL, scalars copied, reference lists
//! resolved one GET at a time and joined with `", "`.

mod builder;
mod error;
mod id;
mod references;
mod types;

pub use builder::build_record;
pub use error::RecordError;
pub use id::extract_id;
pub use references::{resolve_reference_list, ReferenceField, JOIN_SEPARATOR};
pub use types::{CharacterRecord, CharacterId};
