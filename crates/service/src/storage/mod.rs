//! Storage abstractions for service layer
//!
//! A single generic in-memory store backs every entity so the ID allocation
//! and locking rules live in one place.

pub mod memory_store;
