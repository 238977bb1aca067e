/// unwrap a database result inside a route.
/// `NotFound` becomes a 404, every other error is logged and becomes a 500.
macro_rules! db_handle_get_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(diesel::result::Error::NotFound) => {
                return Err(rocket::http::Status::NotFound);
            }
            Err(error) => {
                log::error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(rocket::http::Status::InternalServerError);
            }
        }
    }
}

/// unwrap a database result and turn failures into the crate error.
/// `NotFound` is not logged, the caller decides what it means.
macro_rules! db_handle_get_error {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(diesel::result::Error::NotFound) => {
                return Err($crate::errors::Error::DatabaseError {
                    source: diesel::result::Error::NotFound,
                });
            }
            Err(error) => {
                log::error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err($crate::errors::Error::DatabaseError { source: error });
            }
        }
    }
}

pub(crate) use db_handle_get_error_http;
pub(crate) use db_handle_get_error;
