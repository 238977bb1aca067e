use rocket::serde::json::{Error as JsonError, Json};
use rocket::{post, State};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::config::AppConfig;
use crate::errors::{CustomResult, DatabaseSnafu, Error};
use crate::modules::auth::{Session, STAFF};
use crate::modules::models::general::establish_connection;
use crate::modules::models::lap::Lap;
use crate::modules::models::runner::Runner;
use crate::modules::redis::Redis;

pub const INVALID_LAP_MESSAGE: &str = "Ungültige Startnummer";

/// # record a lap
/// appends one lap to the runner with the given startnumber
#[post("/laps", data = "<request>")]
pub fn record(
    config: &State<AppConfig>,
    session: Session,
    request: Result<Json<NewLapRequest>, JsonError<'_>>,
) -> CustomResult<Json<ApiRecordedLap>> {
    session.require(STAFF)?;
    let number = request
        .map_err(|_| Error::InvalidInputError {
            message: INVALID_LAP_MESSAGE.to_string(),
        })?
        .number;

    let conn = &mut establish_connection(&config.database_url)?;
    if !Runner::exists(conn, number).context(DatabaseSnafu)? {
        return Err(Error::RunnerNotFoundError { number });
    }

    // the runner can be deleted between the check and the insert
    let lap = Lap::new(conn, number).map_err(|source| Error::for_runner(number, source))?;
    let laps = Lap::count_from_runner(conn, number).context(DatabaseSnafu)?;

    Redis::clear_cached(config);
    Ok(Json(ApiRecordedLap { lap, laps }))
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewLapRequest {
    pub number: i32,
}

/// # Struct representing a json response for a recorded lap
/// `laps` is the new lap count of the runner
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiRecordedLap {
    pub lap: Lap,
    pub laps: i64,
}
