//! Pieces shared by every service binary: logging setup and the small
//! response types that are not tied to a single entity.

pub mod types;
pub mod utils;
