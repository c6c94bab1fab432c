pub mod errors;
pub mod extract;
pub mod launcher;
pub mod routes;
pub mod startup;

pub use startup::{run, ServiceKind};
