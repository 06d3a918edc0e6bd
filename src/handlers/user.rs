use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{NewUser, User};
use crate::store::EntryStore;
use crate::AppState;

/// Username of the stand-in account used while there is no real auth.
pub const PLACEHOLDER_USERNAME: &str = "testuser";

/// Returns the current user, creating the placeholder account on first
/// access.
pub async fn current_user(State(state): State<AppState>) -> AppResult<Json<User>> {
    if let Some(user) = state.store.get_user_by_username(PLACEHOLDER_USERNAME).await? {
        return Ok(Json(user));
    }

    let user = state
        .store
        .create_user(NewUser {
            username: PLACEHOLDER_USERNAME.into(),
            password: "password".into(),
        })
        .await?;
    Ok(Json(user))
}
