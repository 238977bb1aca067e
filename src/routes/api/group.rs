use rocket::serde::json::Json;
use rocket::{get, State};
use snafu::ResultExt;

use crate::config::AppConfig;
use crate::errors::{CustomResult, DatabaseSnafu};
use crate::modules::auth::{Session, STAFF};
use crate::modules::models::general::establish_connection;
use crate::modules::models::group::Group;

#[get("/groups")]
pub fn get_all(config: &State<AppConfig>, session: Session) -> CustomResult<Json<Vec<Group>>> {
    session.require(STAFF)?;

    let conn = &mut establish_connection(&config.database_url)?;
    Ok(Json(Group::get_all(conn).context(DatabaseSnafu)?))
}
