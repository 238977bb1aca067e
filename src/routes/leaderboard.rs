use log::error;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::{get, State};
use rocket_dyn_templates::{context, Template};

use crate::config::AppConfig;
use crate::modules::auth::Session;
use crate::modules::models::leaderboard::Leaderboard;
use crate::routes::page::PageContext;

/// # leaderboard page
/// public, shows the podium and everyone after it
#[get("/")]
pub fn index(config: &State<AppConfig>, session: Session, flash: Option<FlashMessage<'_>>) -> Result<Template, Status> {
    let page = PageContext::new(&session, flash);

    let leaderboard = match Leaderboard::load(config) {
        Ok(leaderboard) => leaderboard,
        Err(err) => {
            error!(target:"routes/leaderboard:index", "Error loading leaderboard: {}", err);
            return Err(err.status());
        }
    };

    Ok(Template::render("leaderboard", context! {
        page,
        leaderboard,
    }))
}
