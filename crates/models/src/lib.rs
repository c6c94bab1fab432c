//! Entity records served by the three services and the input shapes their
//! `POST`/`PUT` bodies decode into.
//!
//! Input shapes decode leniently: unknown fields are ignored and missing
//! fields (or `null`) fall back to their defaults, so only malformed JSON is
//! rejected. Keys also match in their capitalised spelling (`Content`, `Name`).

pub mod note;
pub mod task;
pub mod user;

use serde::{Deserialize, Deserializer};

/// A JSON `null` decodes to the field's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub use note::{Note, NoteInput};
pub use task::{Task, TaskInput, TaskStatus};
pub use user::{User, UserInput};
