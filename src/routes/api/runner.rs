use log::info;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{delete, get, post, State};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{CustomResult, DatabaseSnafu, Error};
use crate::modules::auth::{Session, STAFF, SUPERADMIN_ONLY};
use crate::modules::models::general::establish_connection;
use crate::modules::models::group::Group;
use crate::modules::models::runner::{Runner, RunnerForm, RunnerStanding};
use crate::modules::redis::Redis;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # list all runners
/// ranked by lap count, ties by startnumber
#[get("/runners")]
pub fn get_all(config: &State<AppConfig>, session: Session) -> CustomResult<Json<ApiRunnerList>> {
    session.require(STAFF)?;

    let conn = &mut establish_connection(&config.database_url)?;
    let standings = Runner::get_all_standings(conn).context(DatabaseSnafu)?;

    Ok(Json(ApiRunnerList {
        data: standings.into_iter().map(ApiRunner::from).collect(),
    }))
}

#[get("/runners/<number>")]
pub fn get_one(config: &State<AppConfig>, session: Session, number: i32) -> CustomResult<Json<ApiRunner>> {
    session.require(STAFF)?;

    let conn = &mut establish_connection(&config.database_url)?;
    let standing = Runner::get_standing(conn, number).map_err(|source| Error::for_runner(number, source))?;
    Ok(Json(ApiRunner::from(standing)))
}

/***** MODIFY RUNNERS *****/

/// # register a new runner
/// answers with the startnumber the server assigned
#[post("/runners/create", data = "<runner>")]
pub fn create(
    config: &State<AppConfig>,
    session: Session,
    runner: Result<Json<RunnerForm>, JsonError<'_>>,
) -> CustomResult<Json<ApiCreatedRunner>> {
    session.require(SUPERADMIN_ONLY)?;
    let runner = runner.map_err(|_| Error::InvalidInputError {
        message: INVALID_REQUEST_MESSAGE.to_string(),
    })?;

    let created = create_runner(config, &session, &runner)?;
    Ok(Json(ApiCreatedRunner { number: created.number }))
}

#[delete("/runners/<number>")]
pub fn delete(config: &State<AppConfig>, session: Session, number: i32) -> CustomResult<Json<ApiDeletedRunner>> {
    let number = delete_runner(config, &session, number)?;
    Ok(Json(ApiDeletedRunner { number }))
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

pub const INVALID_REQUEST_MESSAGE: &str = "Ungültige Anfrage";

/// # create a runner
/// shared by the api and the html form.
/// the role is checked before the input, the input before the database is touched.
///
/// ## Arguments
/// * `config` - the app config
/// * `session` - the session of the request
/// * `form` - the submitted runner
///
/// ## Returns
/// * `Runner` - the created runner
pub fn create_runner(config: &AppConfig, session: &Session, form: &RunnerForm) -> CustomResult<Runner> {
    session.require(SUPERADMIN_ONLY)?;
    let valid = form.validate(config)?;

    let conn = &mut establish_connection(&config.database_url)?;
    let runner = Runner::create(conn, &valid).context(DatabaseSnafu)?;

    Redis::clear_cached(config);
    Ok(runner)
}

/// # delete a runner
/// shared by the api and the html form
///
/// ## Returns
/// * `i32` - the startnumber of the deleted runner
/// * `Error::RunnerNotFoundError` - when no runner has the number
pub fn delete_runner(config: &AppConfig, session: &Session, number: i32) -> CustomResult<i32> {
    let role = session.require(SUPERADMIN_ONLY)?;

    let conn = &mut establish_connection(&config.database_url)?;
    if !Runner::delete(conn, number).context(DatabaseSnafu)? {
        return Err(Error::RunnerNotFoundError { number });
    }

    info!(target:"routes/api/runner:delete_runner", "runner {} deleted by {}", number, role);
    Redis::clear_cached(config);
    Ok(number)
}

/// # Struct representing a json response for a runner
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRunner {
    pub number: i32,
    pub first_name: String,
    pub last_name: String,
    pub grade: String,
    pub group_uuid: Option<Uuid>,
    pub group: Option<Group>,
    pub laps: i32,
}

impl From<RunnerStanding> for ApiRunner {
    fn from(standing: RunnerStanding) -> Self {
        let group = match (standing.group_uuid, standing.group_name) {
            (Some(uuid), Some(name)) => Some(Group { uuid, name }),
            _ => None,
        };

        ApiRunner {
            number: standing.number,
            first_name: standing.first_name,
            last_name: standing.last_name,
            grade: standing.grade,
            group_uuid: standing.group_uuid,
            group,
            laps: standing.laps,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiRunnerList {
    pub data: Vec<ApiRunner>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiCreatedRunner {
    pub number: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiDeletedRunner {
    pub number: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runners_carry_their_group() {
        let uuid = Uuid::new_v4();
        let runner = ApiRunner::from(RunnerStanding {
            number: 3,
            first_name: "Anna".to_string(),
            last_name: "Schmidt".to_string(),
            grade: "5a".to_string(),
            group_uuid: Some(uuid),
            group_name: Some("Nordhaus".to_string()),
            laps: 6,
        });

        let json = serde_json::to_value(&runner).unwrap();
        assert_eq!(json["firstName"], "Anna");
        assert_eq!(json["groupUuid"], uuid.to_string());
        assert_eq!(json["group"]["name"], "Nordhaus");
        assert_eq!(json["laps"], 6);
    }

    #[test]
    fn runners_without_group_serialize_null() {
        let runner = ApiRunner::from(RunnerStanding::placeholder(0));
        let json = serde_json::to_value(&runner).unwrap();
        assert!(json["group"].is_null());
        assert!(json["groupUuid"].is_null());
    }
}
