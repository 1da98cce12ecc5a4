use serde::Serialize;

use crate::auth::extractor::AuthUser;
use crate::extract::Json;
use crate::models::Role;

#[derive(Serialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// Profile of the caller, read straight from the verified token.
pub async fn me(auth: AuthUser) -> Json<Profile> {
    Json(Profile {
        id: auth.user_id,
        name: auth.name,
        role: auth.role,
    })
}
