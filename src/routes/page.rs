use rocket::request::FlashMessage;
use rocket_dyn_templates::{context, Template};
use serde::Serialize;

use crate::modules::auth::{Role, Session};
use crate::modules::notice::Notice;

/// # data every page template needs
/// the role decides which links the navigation shows,
/// the notice is the flash message of the previous action.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub user_role: Option<Role>,
    pub notice: Option<Notice>,
}

impl PageContext {
    pub fn new(session: &Session, flash: Option<FlashMessage<'_>>) -> PageContext {
        PageContext {
            user_role: session.user_role,
            notice: flash.as_ref().map(Notice::from_flash),
        }
    }
}

pub fn access_denied(page: &PageContext) -> Template {
    Template::render("access_denied", context! { page })
}
