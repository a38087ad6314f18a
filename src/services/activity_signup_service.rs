use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::SignupError;
use crate::models::ActivityDirectory;

/// Confirmation body for successful signup and removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.snapshot().await
}

pub async fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, SignupError> {
    let activity = store.enroll(activity_name, email).await.map_err(|e| {
        warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
        e
    })?;

    // Capacity is advisory only; log when a signup pushes past it.
    if activity.participants.len() > activity.max_participants as usize {
        warn!(
            activity = %activity_name,
            participants = activity.participants.len(),
            max_participants = activity.max_participants,
            "activity is over capacity"
        );
    }
    info!(activity = %activity_name, email = %email, "participant signed up");

    Ok(MessageView {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, SignupError> {
    store.remove(activity_name, email).await.map_err(|e| {
        warn!(activity = %activity_name, email = %email, "removal rejected: {}", e);
        e
    })?;
    info!(activity = %activity_name, email = %email, "participant removed");

    Ok(MessageView {
        message: format!("Removed {} from {}", email, activity_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signup_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let view = signup_for_activity(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            view.message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[tokio::test]
    async fn remove_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let view = remove_participant(&store, "Art Studio", "lucy@mergington.edu")
            .await
            .unwrap();
        assert_eq!(view.message, "Removed lucy@mergington.edu from Art Studio");
        let listed = list_activities(&store).await;
        assert!(listed["Art Studio"].participants.is_empty());
    }

    #[tokio::test]
    async fn errors_pass_through() {
        let store = ActivityStore::seeded();
        assert_eq!(
            signup_for_activity(&store, "Chess Club", "daniel@mergington.edu")
                .await
                .unwrap_err(),
            SignupError::AlreadySignedUp
        );
        assert_eq!(
            remove_participant(&store, "Nonexistent Club", "daniel@mergington.edu")
                .await
                .unwrap_err(),
            SignupError::ActivityNotFound
        );
    }
}
