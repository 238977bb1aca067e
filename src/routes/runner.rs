use rocket::form::Form;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, uri, State};
use rocket_dyn_templates::{context, Template};

use crate::config::AppConfig;
use crate::macros::database_error_handler::db_handle_get_error_http;
use crate::modules::auth::{Session, STAFF, SUPERADMIN_ONLY};
use crate::modules::models::general::establish_connection;
use crate::modules::models::runner::{Runner, RunnerForm};
use crate::modules::notice::Notice;
use crate::routes::api::runner::{create_runner, delete_runner};
use crate::routes::page::{access_denied, PageContext};

/**************************************************************************************************/
/**************** PAGES ***************************************************************************/
/**************************************************************************************************/

/// # runner list
/// every runner with group and lap count
#[get("/runners")]
pub fn list(config: &State<AppConfig>, session: Session, flash: Option<FlashMessage<'_>>) -> Result<Template, Status> {
    let page = PageContext::new(&session, flash);
    if !session.has_any(STAFF) {
        return Ok(access_denied(&page));
    }

    let conn = &mut establish_connection(&config.database_url).map_err(|err| err.status())?;
    let runners = db_handle_get_error_http!(Runner::get_all_standings(conn), "routes/runner:list", "runners");

    Ok(Template::render("runners", context! {
        page,
        runners,
        can_delete: session.has_any(SUPERADMIN_ONLY),
    }))
}

/// # runner form
/// the house and grade options come from the config.
/// after a rejected submit the query carries the typed values back.
#[get("/runners/create?<draft..>")]
pub fn create_form(
    config: &State<AppConfig>,
    session: Session,
    flash: Option<FlashMessage<'_>>,
    draft: Option<RunnerForm>,
) -> Template {
    let page = PageContext::new(&session, flash);
    if !session.has_any(SUPERADMIN_ONLY) {
        return access_denied(&page);
    }

    Template::render("create_runner", context! {
        page,
        houses: &config.houses,
        grades: &config.grades,
        draft: draft.unwrap_or_default(),
    })
}

/// # the startnumber of a new runner
/// "Okay" leads back to an empty form
#[get("/runners/created/<number>")]
pub fn created(session: Session, flash: Option<FlashMessage<'_>>, number: i32) -> Template {
    let page = PageContext::new(&session, flash);
    if !session.has_any(SUPERADMIN_ONLY) {
        return access_denied(&page);
    }

    Template::render("runner_created", context! {
        page,
        number,
    })
}

/***** FORM ACTIONS *****/

#[post("/runners/create", data = "<form>")]
pub fn create(config: &State<AppConfig>, session: Session, form: Form<RunnerForm>) -> Flash<Redirect> {
    match create_runner(config, &session, &form) {
        Ok(runner) => Notice::for_create(Status::Ok, None).flash(Redirect::to(uri!(created(runner.number)))),
        Err(err) => {
            let message = err.public_message();
            // only invalid input is worth correcting
            let draft = (err.status() == Status::BadRequest).then(|| form.into_inner());
            Notice::for_create(err.status(), Some(&message)).flash(Redirect::to(uri!(create_form(draft))))
        }
    }
}

#[post("/runners/<number>/delete")]
pub fn delete(config: &State<AppConfig>, session: Session, number: i32) -> Flash<Redirect> {
    let status = match delete_runner(config, &session, number) {
        Ok(_) => Status::Ok,
        Err(err) => err.status(),
    };

    Notice::for_delete(status).flash(Redirect::to(uri!(list())))
}
