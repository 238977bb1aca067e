use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::Flash;
use serde::Serialize;

use crate::errors::{FORBIDDEN_MESSAGE, GENERIC_ERROR_MESSAGE, RUNNER_NOT_FOUND_MESSAGE};

pub const RUNNER_CREATED_MESSAGE: &str = "Läufer erfolgreich erstellt";
pub const RUNNER_DELETED_MESSAGE: &str = "Läufer erfolgreich gelöscht";
pub const LOGIN_FAILED_MESSAGE: &str = "Falsches Passwort";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// # a short message shown to the user after an action
/// carried from a form post to the next page in a flash cookie
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// # notice for a runner creation
    ///
    /// ## Arguments
    /// * `status` - the status the creation ended with
    /// * `message` - the message the server supplied, only used for validation errors
    pub fn for_create(status: Status, message: Option<&str>) -> Notice {
        match status.code {
            200 => Notice::success(RUNNER_CREATED_MESSAGE),
            400 => match message.filter(|message| !message.is_empty()) {
                Some(message) => Notice::error(message),
                None => Notice::error(GENERIC_ERROR_MESSAGE),
            },
            403 => Notice::error(FORBIDDEN_MESSAGE),
            _ => Notice::error(GENERIC_ERROR_MESSAGE),
        }
    }

    /// # notice for a runner deletion
    pub fn for_delete(status: Status) -> Notice {
        match status.code {
            200 => Notice::success(RUNNER_DELETED_MESSAGE),
            403 => Notice::error(FORBIDDEN_MESSAGE),
            404 => Notice::error(RUNNER_NOT_FOUND_MESSAGE),
            _ => Notice::error(GENERIC_ERROR_MESSAGE),
        }
    }

    pub fn flash<R>(self, responder: R) -> Flash<R> {
        Flash::new(responder, self.kind.as_str(), self.message)
    }

    pub fn from_flash(flash: &FlashMessage<'_>) -> Notice {
        match flash.kind() {
            "success" => Notice::success(flash.message()),
            _ => Notice::error(flash.message()),
        }
    }
}
