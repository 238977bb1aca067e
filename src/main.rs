use rocket::{launch, Build, Rocket};

use sponsored_run::build_rocket;
use sponsored_run::config::AppConfig;
use sponsored_run::modules::helpers::logging::setup_logging;

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    let config = AppConfig::from_env().expect("Failed to load configuration");

    // start the webserver
    build_rocket(config)
}
