use rocket::serde::json::Json;
use rocket::{get, State};

use crate::config::AppConfig;
use crate::errors::CustomResult;
use crate::modules::models::leaderboard::Leaderboard;

/// # the leaderboard
/// public, served from the cache in release builds
#[get("/leaderboard")]
pub fn get(config: &State<AppConfig>) -> CustomResult<Json<Leaderboard>> {
    Ok(Json(Leaderboard::load(config)?))
}
