use log::{info, warn};
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, uri, FromForm, State};
use rocket_dyn_templates::{context, Template};

use crate::config::AppConfig;
use crate::modules::auth::{Role, Session};
use crate::modules::notice::{Notice, LOGIN_FAILED_MESSAGE};
use crate::routes::page::PageContext;

#[derive(FromForm)]
pub struct LoginForm {
    #[field(default = String::new())]
    pub password: String,
}

#[get("/login")]
pub fn login_form(session: Session, flash: Option<FlashMessage<'_>>) -> Template {
    Template::render("login", context! {
        page: PageContext::new(&session, flash),
    })
}

/// # log in
/// the password decides the role of the session
#[post("/login", data = "<form>")]
pub fn login(config: &State<AppConfig>, cookies: &CookieJar<'_>, form: Form<LoginForm>) -> Flash<Redirect> {
    match Role::for_password(config, &form.password) {
        Some(role) => {
            Session::login(cookies, role);
            info!(target:"routes/session:login", "logged in as {}", role);
            Notice::success(format!("Angemeldet als {role}")).flash(Redirect::to("/"))
        }
        None => {
            warn!(target:"routes/session:login", "failed login attempt");
            Notice::error(LOGIN_FAILED_MESSAGE).flash(Redirect::to(uri!(login_form())))
        }
    }
}

#[post("/logout")]
pub fn logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    Session::logout(cookies);
    Notice::success("Abgemeldet").flash(Redirect::to("/"))
}
