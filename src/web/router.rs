use std::path::Path;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityStore;
use crate::web::routes::{activities, activity, root};

/// Assembles the full application around a shared store.
pub fn build_router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    let api_routes = Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(activity::remove_participant_handler),
        );

    Router::new()
        .route("/", get(root::root_handler))
        .merge(api_routes)
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
