use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityStore;
use crate::error::SignupError;
use crate::services::activity_signup_service::{self, MessageView};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, SignupError> {
    activity_signup_service::signup_for_activity(&store, &activity_name, &query.email)
        .await
        .map(Json)
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, SignupError> {
    activity_signup_service::remove_participant(&store, &activity_name, &email)
        .await
        .map(Json)
}
