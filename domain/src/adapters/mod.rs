//! Storage adapters that live inside the domain crate for convenience.
//!
//! The in-memory adapter doubles as the production backend here (the service
//! has no durable persistence) and as the test storage.

pub mod memory_storage;
