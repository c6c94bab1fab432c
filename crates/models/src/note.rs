use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
}

/// Creatable/updatable fields of a note. `id` in a request body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteInput {
    #[serde(alias = "Content", deserialize_with = "crate::null_as_default")]
    pub content: String,
}
