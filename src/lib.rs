use rocket::fs::{relative, FileServer};
use rocket::{catchers, routes, Build, Rocket};
use rocket_dyn_templates::Template;

use crate::config::AppConfig;
use crate::modules::helpers::handlebars::format_laps::FormatLaps;
use crate::modules::helpers::handlebars::format_runner::FormatRunner;

pub mod config;
pub mod errors;
pub mod modules;
pub mod schema;

pub(crate) mod macros {
    pub(crate) mod database_error_handler;
    pub(crate) mod request_caching;
}

pub mod routes {
    pub mod catchers;
    pub mod leaderboard;
    pub mod page;
    pub mod runner;
    pub mod session;

    pub mod api {
        pub mod group;
        pub mod lap;
        pub mod leaderboard;
        pub mod runner;
        pub mod session;
    }
}


/// # build the web server
/// the config is managed state so every route can read it
pub fn build_rocket(config: AppConfig) -> Rocket<Build> {
    use crate::routes::{api, leaderboard, runner, session};

    rocket::build()
        .manage(config)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("formatLaps", Box::new(FormatLaps));
            engines.handlebars.register_helper("formatRunner", Box::new(FormatRunner));
        }))
        .mount(
            "/",
            routes![
                leaderboard::index,
                // runners
                runner::list,
                runner::create_form,
                runner::created,
                runner::create,
                runner::delete,
                // session
                session::login_form,
                session::login,
                session::logout,
            ],
        )
        .mount(
            "/api",
            routes![
                // runners
                api::runner::get_all,
                api::runner::get_one,
                api::runner::create,
                api::runner::delete,
                // laps
                api::lap::record,
                // groups
                api::group::get_all,
                // leaderboard
                api::leaderboard::get,
                // session
                api::session::get_one,
            ],
        )
        .mount("/static", FileServer::from(relative!("static")))
        .register("/", catchers![routes::catchers::page_default])
        .register("/api", catchers![routes::catchers::api_default])
}
