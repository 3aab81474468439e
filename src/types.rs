//! Core data types for the activity catalog

use serde::{Deserialize, Serialize};

/// A single extracurricular activity.
///
/// The activity name is the catalog key and is not repeated here; this
/// matches the wire format, where `GET /activities` returns a JSON object
/// keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether the roster has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Remaining capacity, derived rather than stored.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

/// Query parameters carrying the student email for mutation endpoints.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
