use rocket::get;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::modules::auth::{Role, Session};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSession {
    pub user_role: Option<Role>,
}

/// the role of the current session, `null` when nobody is logged in
#[get("/session")]
pub fn get_one(session: Session) -> Json<ApiSession> {
    Json(ApiSession {
        user_role: session.user_role,
    })
}
