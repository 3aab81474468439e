//! Service implementations
//!
//! Real implementations of the service traits for production use.

pub mod activity_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use activity_store::InMemoryActivityStore;
