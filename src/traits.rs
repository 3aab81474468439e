//! Service trait definitions for dependency injection
//!
//! The store seam is abstracted behind a trait so HTTP handlers stay generic
//! and can be unit-tested against a mock.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::ActivityResult;
use crate::types::Activity;

/// Activity catalog contract: one read operation, two roster mutations.
#[mockall::automock]
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Full, consistent snapshot of all activities keyed by name.
    async fn snapshot(&self) -> BTreeMap<String, Activity>;

    /// Add `email` to the activity roster and return a confirmation message.
    ///
    /// Validation order is part of the contract: unknown activity first,
    /// then duplicate enrollment, then capacity.
    async fn signup(&self, activity: &str, email: &str) -> ActivityResult<String>;

    /// Remove `email` from the activity roster and return a confirmation
    /// message. Unknown activity is checked before membership.
    async fn unregister(&self, activity: &str, email: &str) -> ActivityResult<String>;
}
