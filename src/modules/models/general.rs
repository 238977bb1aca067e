use diesel::pg::PgConnection;
use diesel::Connection;
use log::error;

use crate::errors::{CustomResult, Error};

/// # open a database connection
/// every request opens its own connection.
///
/// ## Arguments
/// * `database_url` - the postgres url from the config
pub fn establish_connection(database_url: &str) -> CustomResult<PgConnection> {
    PgConnection::establish(database_url).map_err(|source| {
        error!(target:"models/general:establish_connection", "Error connecting to database: {}", source);
        Error::ConnectionError { source }
    })
}
