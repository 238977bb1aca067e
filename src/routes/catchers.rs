use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, Request};
use rocket_dyn_templates::{context, Template};

use crate::errors::{ErrorBody, FORBIDDEN_MESSAGE, GENERIC_ERROR_MESSAGE};
use crate::modules::auth::Session;
use crate::routes::page::PageContext;

pub const NOT_FOUND_MESSAGE: &str = "Seite nicht gefunden";

fn message_for(status: Status) -> &'static str {
    match status.code {
        403 => FORBIDDEN_MESSAGE,
        404 => NOT_FOUND_MESSAGE,
        _ => GENERIC_ERROR_MESSAGE,
    }
}

/// error page for every failed page request
#[catch(default)]
pub fn page_default(status: Status, request: &Request) -> (Status, Template) {
    let page = PageContext::new(&Session::from_cookies(request.cookies()), None);

    let template = Template::render("error", context! {
        page,
        code: status.code,
        message: message_for(status),
    });

    (status, template)
}

/// json error for every failed api request that did not produce its own body
#[catch(default)]
pub fn api_default(status: Status, _: &Request) -> (Status, Json<ErrorBody>) {
    (status, Json(ErrorBody::new(message_for(status))))
}
