use axum::{Json, Router, routing::get};

use super::model::{User, directory_users};

/// Create the user routes
pub fn routes() -> Router {
    Router::new().route("/users", get(list_users))
}

/// List every user in the directory.
async fn list_users() -> Json<Vec<User>> {
    Json(directory_users())
}
