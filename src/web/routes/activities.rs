use axum::{extract::State, Json};

use crate::database::ActivityStore;
use crate::models::ActivityDirectory;
use crate::services::activity_signup_service;

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityDirectory> {
    Json(activity_signup_service::list_activities(&store).await)
}
