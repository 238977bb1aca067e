use log::error;
use redis::{Client, Commands, Connection, FromRedisValue, RedisResult, ToRedisArgs};

use crate::config::AppConfig;

pub const LEADERBOARD_KEY: &str = "/api/leaderboard";

/// every key that holds data derived from runners or laps
pub const CACHED_KEYS: &[&str] = &[LEADERBOARD_KEY];

pub struct Redis {}

impl Redis {
    /// # connect to redis
    ///
    /// ## Returns
    /// * `Ok(None)` - when caching is disabled in the config
    /// * `Ok(Some(Connection))` - an open connection
    pub fn connect(config: &AppConfig) -> RedisResult<Option<Connection>> {
        match &config.redis_url {
            Some(redis_url) => Client::open(redis_url.as_str())?.get_connection().map(Some),
            None => Ok(None),
        }
    }

    pub fn set_data<K: ToRedisArgs, D: ToRedisArgs>(conn: &mut Connection, key: K, data: D) -> RedisResult<()> {
        conn.set::<K, D, ()>(key, data)
    }

    pub fn get_data<K: ToRedisArgs, D: FromRedisValue>(conn: &mut Connection, key: K) -> RedisResult<D> {
        conn.get::<K, D>(key)
    }

    pub fn delete<K: ToRedisArgs>(conn: &mut Connection, key: K) -> RedisResult<()> {
        conn.del::<K, ()>(key)
    }

    /// # drop every cached response that depends on runners or laps
    /// call after any change to runners or laps. a failing cache only gets
    /// logged, the change itself already happened.
    ///
    /// ## Returns
    /// * `true` - the cache is cleared or caching is disabled
    /// * `false` - redis could not be reached or a key could not be deleted
    pub fn clear_cached(config: &AppConfig) -> bool {
        let mut r_conn = match Redis::connect(config) {
            Ok(Some(r_conn)) => r_conn,
            Ok(None) => return true,
            Err(error) => {
                error!(target:"modules/redis:clear_cached", "Error connecting to redis: {}", error);
                return false;
            }
        };

        let mut cleared = true;
        for key in CACHED_KEYS {
            if let Err(error) = Redis::delete(&mut r_conn, *key) {
                error!(target:"modules/redis:clear_cached", "Error while deleting key {}: {}", key, error);
                cleared = false;
            }
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(redis_url: Option<&str>) -> AppConfig {
        AppConfig {
            database_url: String::new(),
            redis_url: redis_url.map(str::to_string),
            houses: vec![],
            grades: vec![],
            helper_password: None,
            superadmin_password: None,
        }
    }

    #[test]
    fn clearing_without_redis_is_a_no_op() {
        assert!(Redis::clear_cached(&config(None)));
    }

    #[test]
    fn unreachable_redis_is_reported_not_raised() {
        assert!(!Redis::clear_cached(&config(Some("redis://127.0.0.1:1/"))));
    }

    #[test]
    fn the_leaderboard_is_invalidated() {
        assert!(CACHED_KEYS.contains(&LEADERBOARD_KEY));
    }
}
