use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::CustomResult;
use crate::macros::database_error_handler::db_handle_get_error;
use crate::macros::request_caching::{cache_response, read_cache_request};
use crate::modules::models::general::establish_connection;
use crate::modules::models::runner::{Runner, RunnerStanding};
use crate::modules::redis::LEADERBOARD_KEY;

pub const PODIUM_SIZE: usize = 3;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LeaderboardEntry {
    pub place: usize,
    pub number: i32,
    pub first_name: String,
    pub last_name: String,
    pub group_name: Option<String>,
    pub laps: i32,
    /// fills an empty podium slot
    pub placeholder: bool,
}

/// # the ranked runners
/// `podium` is in display order: second, first, third.
/// `rest` holds everyone from the fourth place on.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Leaderboard {
    pub podium: Vec<LeaderboardEntry>,
    pub rest: Vec<LeaderboardEntry>,
}

/// more laps first, ties go to the higher startnumber
pub fn ranking_order(a: &RunnerStanding, b: &RunnerStanding) -> Ordering {
    b.laps.cmp(&a.laps).then_with(|| b.number.cmp(&a.number))
}

/// append placeholders until there are enough runners for the podium
pub fn pad_to_podium(runners: &mut Vec<RunnerStanding>) {
    for slot in runners.len()..PODIUM_SIZE {
        runners.push(RunnerStanding::placeholder(slot as i32));
    }
}

impl Leaderboard {
    /// # build the leaderboard
    /// the standings are ranked again so the order holds no matter where
    /// they came from, then padded to a full podium.
    ///
    /// ## Arguments
    /// * `standings` - the runners with their lap counts
    pub fn new(mut standings: Vec<RunnerStanding>) -> Leaderboard {
        standings.sort_by(ranking_order);
        let real_runners = standings.len();
        pad_to_podium(&mut standings);

        let mut entries: Vec<LeaderboardEntry> = standings
            .into_iter()
            .enumerate()
            .map(|(index, standing)| LeaderboardEntry {
                place: index + 1,
                number: standing.number,
                first_name: standing.first_name,
                last_name: standing.last_name,
                group_name: standing.group_name,
                laps: standing.laps,
                placeholder: index >= real_runners,
            })
            .collect();

        let rest = entries.split_off(PODIUM_SIZE);
        let mut podium = entries;
        podium.swap(0, 1);

        Leaderboard { podium, rest }
    }

    /// # load the leaderboard
    /// served from the cache when possible
    ///
    /// ## Arguments
    /// * `config` - the config with the database and redis urls
    pub fn load(config: &AppConfig) -> CustomResult<Leaderboard> {
        read_cache_request!(config, LEADERBOARD_KEY, "models/leaderboard:load");

        let conn = &mut establish_connection(&config.database_url)?;
        let standings = db_handle_get_error!(Runner::get_all_standings(conn), "models/leaderboard:load", "standings");

        let leaderboard = Leaderboard::new(standings);

        cache_response!(config, LEADERBOARD_KEY, leaderboard, "models/leaderboard:load");
    }

    /// all entries from first to last place
    pub fn ranked(&self) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.podium.iter().chain(self.rest.iter()).collect();
        ranked.sort_by_key(|entry| entry.place);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(number: i32, laps: i32) -> RunnerStanding {
        RunnerStanding {
            number,
            first_name: format!("Runner{number}"),
            last_name: "Test".to_string(),
            grade: "5a".to_string(),
            group_uuid: None,
            group_name: Some("Extern".to_string()),
            laps,
        }
    }

    fn numbers(entries: &[LeaderboardEntry]) -> Vec<i32> {
        entries.iter().map(|entry| entry.number).collect()
    }

    #[test]
    fn empty_leaderboard_has_three_placeholders() {
        let leaderboard = Leaderboard::new(vec![]);

        assert_eq!(leaderboard.podium.len(), PODIUM_SIZE);
        assert!(leaderboard.rest.is_empty());
        assert!(leaderboard.podium.iter().all(|entry| entry.placeholder));
        assert!(leaderboard.podium.iter().all(|entry| entry.first_name == "Niemand" && entry.laps == 0));
        // display order is second, first, third
        assert_eq!(numbers(&leaderboard.podium), vec![1, 0, 2]);
    }

    #[test]
    fn single_runner_takes_first_place() {
        let leaderboard = Leaderboard::new(vec![standing(17, 4)]);

        assert_eq!(leaderboard.podium.len(), PODIUM_SIZE);
        let first = &leaderboard.podium[1];
        assert_eq!(first.number, 17);
        assert_eq!(first.place, 1);
        assert!(!first.placeholder);

        assert!(leaderboard.podium[0].placeholder);
        assert_eq!(leaderboard.podium[0].place, 2);
        assert_eq!(leaderboard.podium[0].number, 1);
        assert!(leaderboard.podium[2].placeholder);
        assert_eq!(leaderboard.podium[2].number, 2);
    }

    #[test]
    fn two_runners_keep_one_placeholder() {
        let leaderboard = Leaderboard::new(vec![standing(3, 1), standing(8, 5)]);

        assert_eq!(numbers(&leaderboard.podium), vec![3, 8, 2]);
        assert_eq!(leaderboard.podium.iter().filter(|entry| entry.placeholder).count(), 1);
    }

    #[test]
    fn podium_is_second_first_third() {
        let leaderboard = Leaderboard::new(vec![
            standing(1, 2),
            standing(2, 9),
            standing(3, 5),
            standing(4, 1),
        ]);

        assert_eq!(numbers(&leaderboard.podium), vec![3, 2, 1]);
        let places: Vec<usize> = leaderboard.podium.iter().map(|entry| entry.place).collect();
        assert_eq!(places, vec![2, 1, 3]);

        assert_eq!(numbers(&leaderboard.rest), vec![4]);
        assert_eq!(leaderboard.rest[0].place, 4);
    }

    #[test]
    fn ties_go_to_the_higher_number() {
        let leaderboard = Leaderboard::new(vec![
            standing(5, 3),
            standing(12, 3),
            standing(7, 3),
            standing(2, 8),
            standing(9, 0),
        ]);

        let ranked: Vec<i32> = leaderboard.ranked().iter().map(|entry| entry.number).collect();
        assert_eq!(ranked, vec![2, 12, 7, 5, 9]);
    }

    #[test]
    fn ranked_order_never_increases_in_laps() {
        let standings: Vec<RunnerStanding> = (1..=25)
            .map(|number| standing(number, (number * 7) % 11))
            .collect();
        let leaderboard = Leaderboard::new(standings);
        let ranked = leaderboard.ranked();

        assert_eq!(ranked.len(), 25);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.laps > b.laps || (a.laps == b.laps && a.number > b.number));
            assert_eq!(a.place + 1, b.place);
        }
    }

    #[test]
    fn full_podium_has_no_placeholders() {
        let leaderboard = Leaderboard::new(vec![standing(1, 1), standing(2, 1), standing(3, 1)]);
        assert!(leaderboard.podium.iter().all(|entry| !entry.placeholder));
        assert!(leaderboard.rest.is_empty());
    }
}
