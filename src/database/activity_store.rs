use std::sync::Arc;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::{ActivityDirectory, ActivityRecord};

/// In-memory activity directory shared by all handlers.
///
/// Cloning is cheap and every clone sees the same data. Mutations hold the
/// write lock for the whole lookup-check-update so two signups for the same
/// email cannot both succeed.
#[derive(Clone, Debug, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    pub async fn snapshot(&self) -> ActivityDirectory {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.inner.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Appends `email` to the activity roster. Capacity is not checked.
    pub async fn enroll(&self, name: &str, email: &str) -> Result<ActivityRecord, SignupError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;
        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    pub async fn remove(&self, name: &str, email: &str) -> Result<ActivityRecord, SignupError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(SignupError::ParticipantNotFound);
        };
        activity.participants.remove(pos);
        Ok(activity.clone())
    }

    pub async fn replace_all(&self, activities: ActivityDirectory) {
        *self.inner.write().await = activities;
    }
}
