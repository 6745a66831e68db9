use serde::Serialize;
use studio_storage::models::User;
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user; the password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
