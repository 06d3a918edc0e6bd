use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A journal owner. There is no real authentication in this service; a single
/// placeholder account is created lazily on first access and the password is
/// stored and returned as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
