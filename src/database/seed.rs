use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::{ActivityDirectory, ActivityRecord};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball training and games",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Track and Field",
        "Running, jumping, and throwing events",
        "Tuesdays and Thursdays, 3:45 PM - 5:15 PM",
        25,
        &["sarah@mergington.edu", "james@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and sculpture techniques",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["lucy@mergington.edu"],
    ),
    (
        "Music Ensemble",
        "Orchestra and band performances",
        "Mondays and Fridays, 4:00 PM - 5:00 PM",
        22,
        &["david@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Debate Club",
        "Develop argumentation and public speaking skills",
        "Thursdays, 3:30 PM - 5:00 PM",
        16,
        &["maya@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Compete in science competitions and experiments",
        "Tuesdays, 3:30 PM - 5:00 PM",
        14,
        &["ryan@mergington.edu", "jessica@mergington.edu"],
    ),
];

/// The nine activities the school starts every term with.
pub fn default_activities() -> ActivityDirectory {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                ActivityRecord::new(description, schedule, *max).with_participants(participants),
            )
        })
        .collect()
}

/// Reads a directory in the same JSON shape `GET /activities` returns.
pub fn load_activities_file(path: impl AsRef<Path>) -> Result<ActivityDirectory, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.display().to_string(),
        source,
    })?;
    let activities = parse_activities(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.display().to_string(),
        source,
    })?;
    validate_activities(&activities)?;
    Ok(activities)
}

pub fn parse_activities(raw: &str) -> serde_json::Result<ActivityDirectory> {
    serde_json::from_str(raw)
}

/// Every capacity must be positive and no roster may list an email twice.
pub fn validate_activities(activities: &ActivityDirectory) -> Result<(), ConfigError> {
    for (name, activity) in activities {
        let invalid = |reason: String| ConfigError::SeedInvalid {
            activity: name.clone(),
            reason,
        };
        if activity.max_participants == 0 {
            return Err(invalid("max_participants must be positive".to_string()));
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(invalid(format!("{} is listed more than once", email)));
            }
        }
    }
    Ok(())
}
