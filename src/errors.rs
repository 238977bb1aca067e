use diesel::result::DatabaseErrorKind;
use log::error;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::{Deserialize, Serialize};
use snafu::Snafu;

pub const GENERIC_ERROR_MESSAGE: &str = "Ein Fehler ist aufgetreten";
pub const FORBIDDEN_MESSAGE: &str = "Fehlende Berechtigung";
pub const RUNNER_NOT_FOUND_MESSAGE: &str = "Läufer nicht gefunden";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Fehlende Berechtigung"))]
    ForbiddenError,

    #[snafu(display("{message}"))]
    InvalidInputError { message: String },

    #[snafu(display("runner {number} does not exist"))]
    RunnerNotFoundError { number: i32 },

    #[snafu(display("database query failed: {source}"))]
    DatabaseError { source: diesel::result::Error },

    #[snafu(display("could not connect to the database: {source}"))]
    ConnectionError { source: diesel::ConnectionError },

    #[snafu(display("missing configuration value {key}"))]
    MissingConfigError { key: String },

    #[snafu(display("could not read {path}: {source}"))]
    FileError { path: String, source: std::io::Error },

    #[snafu(display("could not parse {path}: {source}"))]
    ParseError { path: String, source: serde_json::Error },
}

pub type CustomResult<T> = Result<T, Error>;

impl Error {
    /// # http status
    /// the status an api client receives for this error
    pub fn status(&self) -> Status {
        match self {
            Error::ForbiddenError => Status::Forbidden,
            Error::InvalidInputError { .. } => Status::BadRequest,
            Error::RunnerNotFoundError { .. } => Status::NotFound,
            _ => Status::InternalServerError,
        }
    }

    /// # error for a query about a single runner
    /// a missing row or a lap pointing at a deleted runner both mean the
    /// runner does not exist.
    ///
    /// ## Arguments
    /// * `number` - the startnumber the query was about
    /// * `source` - the failed query
    pub fn for_runner(number: i32, source: diesel::result::Error) -> Error {
        match source {
            diesel::result::Error::NotFound
            | diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                Error::RunnerNotFoundError { number }
            }
            source => Error::DatabaseError { source },
        }
    }

    /// # public message
    /// the message that is safe to show to a user.
    /// internal failures collapse into the generic message.
    pub fn public_message(&self) -> String {
        match self {
            Error::ForbiddenError => FORBIDDEN_MESSAGE.to_string(),
            Error::InvalidInputError { message } => message.clone(),
            Error::RunnerNotFoundError { .. } => RUNNER_NOT_FOUND_MESSAGE.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// # Struct representing a json error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> ErrorBody {
        ErrorBody {
            error: message.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!(target:"errors", "{} {} failed: {}", request.method(), request.uri(), self);
        }

        (status, Json(ErrorBody::new(self.public_message()))).respond_to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(Error::ForbiddenError.status(), Status::Forbidden);
        assert_eq!(
            Error::InvalidInputError { message: "Vorname fehlt".to_string() }.status(),
            Status::BadRequest
        );
        assert_eq!(Error::RunnerNotFoundError { number: 4 }.status(), Status::NotFound);
        assert_eq!(
            Error::DatabaseError { source: diesel::result::Error::RollbackTransaction }.status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn missing_runners_are_not_found() {
        assert!(matches!(
            Error::for_runner(4, diesel::result::Error::NotFound),
            Error::RunnerNotFoundError { number: 4 }
        ));

        let violation = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert or update on table \"laps\" violates foreign key constraint".to_string()),
        );
        let error = Error::for_runner(9, violation);
        assert!(matches!(error, Error::RunnerNotFoundError { number: 9 }));
        assert_eq!(error.status(), Status::NotFound);
    }

    #[test]
    fn other_runner_query_failures_stay_internal() {
        let error = Error::for_runner(9, diesel::result::Error::RollbackTransaction);
        assert_eq!(error.status(), Status::InternalServerError);
        assert_eq!(error.public_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn internal_errors_hide_their_details() {
        let error = Error::MissingConfigError { key: "DATABASE_URL".to_string() };
        assert_eq!(error.public_message(), GENERIC_ERROR_MESSAGE);

        let error = Error::InvalidInputError { message: "Unbekanntes Haus: Mars".to_string() };
        assert_eq!(error.public_message(), "Unbekanntes Haus: Mars");
    }
}
