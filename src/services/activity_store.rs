//! In-memory activity store
//!
//! Single-process catalog seeded once at startup; only participant rosters
//! mutate afterwards. Each mutation holds one write guard across its check
//! and its update, so capacity and duplicate invariants hold under
//! concurrent calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ActivityError, ActivityResult};
use crate::traits::ActivityStore;
use crate::types::Activity;

/// Real store implementation backed by a shared in-memory map.
#[derive(Clone)]
pub struct InMemoryActivityStore {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl InMemoryActivityStore {
    /// Create a store seeded with the standard activity catalog.
    pub fn new() -> Self {
        Self::with_activities(seed_activities())
    }

    /// Create a store from an explicit catalog.
    pub fn with_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    async fn signup(&self, activity: &str, email: &str) -> ActivityResult<String> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or(ActivityError::ActivityNotFound)?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if entry.is_full() {
            return Err(ActivityError::ActivityFull);
        }

        entry.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity}"))
    }

    async fn unregister(&self, activity: &str, email: &str) -> ActivityResult<String> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or(ActivityError::ActivityNotFound)?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::ParticipantNotFound)?;

        entry.participants.remove(position);
        Ok(format!("Unregistered {email} from {activity}"))
    }
}

/// The nine-activity catalog the process starts with.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let catalog: [(&str, &str, &str, u32, [&str; 2]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Club",
            "Outdoor soccer practices and weekend matches",
            "Saturdays, 9:00 AM - 11:00 AM",
            22,
            ["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Competitive basketball team training and games",
            "Wednesdays and Fridays, 4:00 PM - 6:00 PM",
            15,
            ["noah@mergington.edu", "ava@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore drawing, painting, and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
            ["isabella@mergington.edu", "henry@mergington.edu"],
        ),
        (
            "Drama Club",
            "Acting, stagecraft, and production of school plays",
            "Mondays and Thursdays, 4:00 PM - 6:00 PM",
            25,
            ["oliver@mergington.edu", "grace@mergington.edu"],
        ),
        (
            "Debate Team",
            "Prepare for competitive debates and public speaking",
            "Fridays, 4:00 PM - 5:30 PM",
            20,
            ["amelia@mergington.edu", "ethan@mergington.edu"],
        ),
        (
            "Robotics Club",
            "Design, build, and program robots for competitions",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            12,
            ["harper@mergington.edu", "mason@mergington.edu"],
        ),
    ];

    catalog
        .into_iter()
        .map(
            |(name, description, schedule, max_participants, participants)| {
                (
                    name.to_string(),
                    Activity {
                        description: description.to_string(),
                        schedule: schedule.to_string(),
                        max_participants,
                        participants: participants.into_iter().map(str::to_string).collect(),
                    },
                )
            },
        )
        .collect()
}
