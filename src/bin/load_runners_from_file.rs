use std::env;
use std::fs;
use std::process;

use log::{error, info, warn};
use snafu::ResultExt;

use sponsored_run::config::AppConfig;
use sponsored_run::errors::{CustomResult, FileSnafu, ParseSnafu};
use sponsored_run::modules::helpers::logging::setup_logging;
use sponsored_run::modules::models::general::establish_connection;
use sponsored_run::modules::models::runner::{Runner, RunnerForm};
use sponsored_run::modules::redis::Redis;

const DEFAULT_FILE: &str = "./runners.json";

/// read a json array of runners, e.g.
/// `[{"firstName": "Anna", "lastName": "Schmidt", "house": "Extern", "grade": "5a"}]`
fn load_runners_from_file(path: &str) -> CustomResult<Vec<RunnerForm>> {
    let content = fs::read_to_string(path).context(FileSnafu { path })?;
    serde_json::from_str(&content).context(ParseSnafu { path })
}

/// # import the runners of a file
/// invalid entries are skipped with a warning.
///
/// ## Returns
/// * `usize` - the number of created runners
fn import_runners(config: &AppConfig, path: &str) -> CustomResult<usize> {
    let runners = load_runners_from_file(path)?;
    let conn = &mut establish_connection(&config.database_url)?;

    let mut created = 0;
    for (index, form) in runners.iter().enumerate() {
        let runner = match form.validate(config) {
            Ok(runner) => runner,
            Err(err) => {
                warn!(target:"load_runners_from_file", "skipping entry {}: {}", index, err);
                continue;
            }
        };

        match Runner::create(conn, &runner) {
            Ok(runner) => {
                info!(target:"load_runners_from_file", "{} {} got startnumber {}", runner.first_name, runner.last_name, runner.number);
                created += 1;
            }
            Err(err) => {
                error!(target:"load_runners_from_file", "failed saving entry {}: {}", index, err);
            }
        }
    }

    if created > 0 {
        Redis::clear_cached(config);
    }

    info!(target:"load_runners_from_file", "created {} of {} runners", created, runners.len());
    Ok(created)
}

fn main() {
    setup_logging().expect("failed to setup logging");

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_FILE.to_string());
    let result = AppConfig::from_env().and_then(|config| import_runners(&config, &path));

    if let Err(err) = result {
        error!(target:"load_runners_from_file", "{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sponsored_run::errors::Error;

    fn temp_file(name: &str, content: &str) -> String {
        let path = env::temp_dir().join(format!("sponsored_run_{}_{name}", process::id()));
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn reads_runner_arrays() {
        let path = temp_file("runners.json", r#"[{"firstName": "Anna", "lastName": "Schmidt", "house": "Extern", "grade": "5a"}, {"firstName": "Ben"}]"#);
        let runners = load_runners_from_file(&path).unwrap();

        assert_eq!(runners.len(), 2);
        assert_eq!(runners[0].last_name, "Schmidt");
        assert!(runners[1].house.is_empty());
    }

    #[test]
    fn missing_files_fail_the_import() {
        let config = AppConfig {
            database_url: String::new(),
            redis_url: None,
            houses: vec![],
            grades: vec![],
            helper_password: None,
            superadmin_password: None,
        };

        let result = import_runners(&config, "/nonexistent/runners.json");
        assert!(matches!(result, Err(Error::FileError { .. })));
    }

    #[test]
    fn broken_files_fail_the_import() {
        let path = temp_file("broken.json", "[{\"firstName\": ");
        assert!(matches!(load_runners_from_file(&path), Err(Error::ParseError { .. })));
    }
}
