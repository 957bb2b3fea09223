//! In-memory repository implementations for tests and local runs.

mod state;

pub use state::InMemoryStateRepo;
