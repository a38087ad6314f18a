use axum::response::Redirect;

pub const INDEX_PATH: &str = "/static/index.html";

// 307 so clients keep the original method.
pub async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
