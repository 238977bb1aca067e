pub mod auth;
pub mod notice;
pub mod redis;

pub mod models {
    pub mod general;
    pub mod group;
    pub mod lap;
    pub mod leaderboard;
    pub mod runner;
}

pub mod helpers {
    pub mod general;
    pub mod logging;

    pub mod handlebars {
        pub mod format_laps;
        pub mod format_runner;
        pub mod params;
    }
}
