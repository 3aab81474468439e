//! Activity signup service
//!
//! This library provides an in-memory catalog of extracurricular activities
//! with signup/unregister operations, exposed over HTTP together with a
//! static browser frontend.

pub mod error;
pub mod server;
pub mod services;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{ActivityError, ActivityResult};
pub use server::ActivityServer;
pub use services::InMemoryActivityStore;
pub use traits::ActivityStore;
pub use types::Activity;
