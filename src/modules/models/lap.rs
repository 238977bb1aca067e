use chrono::NaiveDateTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::schema::laps;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = laps)]
pub struct NewLap {
    pub runner_number: i32,
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
    pub id: i32,
    pub runner_number: i32,
    pub created_at: NaiveDateTime,
}

impl Lap {
    /********** INSERTERS **********/
    /// # record a lap
    /// the timestamp is set by the database.
    /// laps are never edited, only deleted together with their runner.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `runner_number_in` - the startnumber of the runner that completed the lap
    ///
    /// ## Returns
    /// * `Lap` - the recorded lap
    pub fn new(conn: &mut PgConnection, runner_number_in: i32) -> QueryResult<Lap> {
        match diesel::insert_into(laps::table)
            .values(&NewLap {
                runner_number: runner_number_in,
            })
            .get_result::<Lap>(conn)
        {
            Ok(lap) => {
                info!(target:"models/lap:new", "recorded lap {} for runner {}", lap.id, lap.runner_number);
                Ok(lap)
            }
            Err(error) => {
                error!(target:"models/lap:new", "Error recording lap for runner {}: {}", runner_number_in, error);
                Err(error)
            }
        }
    }

    /********** GETTERS **********/
    /// # count the laps of a runner
    pub fn count_from_runner(conn: &mut PgConnection, runner_number_in: i32) -> QueryResult<i64> {
        use crate::schema::laps::dsl::{laps, runner_number};

        laps.filter(runner_number.eq(runner_number_in))
            .count()
            .get_result(conn)
    }
}
