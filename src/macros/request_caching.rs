/// check if a response is in the cache, if it is, return it.
/// else follow the normal flow
///
/// does nothing when debug enabled
macro_rules! read_cache_request {
    ( $config:expr, $key:expr, $target:expr ) => {
        if !cfg!(debug_assertions) {
            match $crate::modules::redis::Redis::connect($config) {
                Ok(Some(mut r_conn)) => {
                    match $crate::modules::redis::Redis::get_data::<_, Option<String>>(&mut r_conn, $key) {
                        Ok(Some(data)) => match serde_json::from_str(&data) {
                            Ok(cached) => return Ok(cached),
                            Err(error) => {
                                log::warn!(target:$target, "Discarding unreadable cache entry {}: {}", $key, error);
                            }
                        },
                        Ok(None) => {}
                        Err(error) => {
                            log::error!(target:$target, "Error reading {} from redis: {}", $key, error);
                        }
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    log::error!(target:$target, "Error connecting to redis: {}", error);
                }
            }
        }
    }
}

/// add the response to the cache and then return it.
///
/// if debug is enabled we wont add to cache.
macro_rules! cache_response {
    ( $config:expr, $key:expr, $data:expr, $target:expr ) => {
        if !cfg!(debug_assertions) {
            if let Ok(Some(mut r_conn)) = $crate::modules::redis::Redis::connect($config) {
                match serde_json::to_string(&$data) {
                    Ok(response_str) => {
                        if let Err(error) = $crate::modules::redis::Redis::set_data(&mut r_conn, $key, response_str) {
                            log::error!(target:$target, "Error caching {}: {}", $key, error);
                        }
                    }
                    Err(error) => {
                        log::error!(target:$target, "Error serializing {} for the cache: {}", $key, error);
                    }
                }
            }
        }

        return Ok($data)
    }
}

pub(crate) use read_cache_request;
pub(crate) use cache_response;
