use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// One extracurricular activity as listed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Insertion order is signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: vec![],
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// The whole directory, keyed by activity name. Listing follows seed order.
pub type ActivityDirectory = IndexMap<String, ActivityRecord>;
