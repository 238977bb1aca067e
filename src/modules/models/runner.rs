use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Nullable, VarChar};
use log::{error, info, warn};
use rocket::{FromForm, UriDisplayQuery};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{CustomResult, Error};
use crate::modules::helpers::general::Helpers;
use crate::modules::models::group::Group;
use crate::schema::{laps, runners};

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = runners)]
pub struct NewRunner {
    pub first_name: String,
    pub last_name: String,
    pub grade: String,
    pub group_uuid: Option<Uuid>,
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = runners, primary_key(number))]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    pub number: i32,
    pub first_name: String,
    pub last_name: String,
    pub grade: String,
    pub group_uuid: Option<Uuid>,
}

/// # a runner together with its group and lap count
/// one row of the leaderboard and of the runner list
#[derive(QueryableByName, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct RunnerStanding {
    #[diesel(sql_type = Integer)]
    pub number: i32,
    #[diesel(sql_type = VarChar)]
    pub first_name: String,
    #[diesel(sql_type = VarChar)]
    pub last_name: String,
    #[diesel(sql_type = VarChar)]
    pub grade: String,
    #[diesel(sql_type = Nullable<diesel::sql_types::Uuid>)]
    pub group_uuid: Option<Uuid>,
    #[diesel(sql_type = Nullable<VarChar>)]
    pub group_name: Option<String>,
    #[diesel(sql_type = Integer)]
    pub laps: i32,
}

const STANDINGS_QUERY: &str = "
    select
        r.number,
        r.first_name,
        r.last_name,
        r.grade,
        r.group_uuid,
        g.name as group_name,
        CAST(count(l.id) AS INT) as laps
    from runners r
        left join groups g on g.uuid = r.group_uuid
        left join laps l on l.runner_number = r.number
";

impl RunnerStanding {
    /// # placeholder for an empty podium slot
    ///
    /// ## Arguments
    /// * `slot` - the index of the empty slot, used as its number
    pub fn placeholder(slot: i32) -> RunnerStanding {
        RunnerStanding {
            number: slot,
            first_name: "Niemand".to_string(),
            last_name: String::new(),
            grade: String::new(),
            group_uuid: None,
            group_name: None,
            laps: 0,
        }
    }
}

impl Runner {
    /********** INSERTERS **********/
    /// # create a runner
    /// the group named after the house is created when needed.
    /// the startnumber is assigned by the database sequence, so it is always
    /// higher than every number handed out before.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `runner` - the validated form data
    ///
    /// ## Returns
    /// * `Runner` - the created runner with its startnumber
    pub fn create(conn: &mut PgConnection, runner: &ValidRunner) -> QueryResult<Runner> {
        let created = conn.transaction::<Runner, diesel::result::Error, _>(|conn| {
            let group = Group::ensure_exists(conn, &runner.house)?;

            diesel::insert_into(runners::table)
                .values(&NewRunner {
                    first_name: runner.first_name.clone(),
                    last_name: runner.last_name.clone(),
                    grade: runner.grade.clone(),
                    group_uuid: Some(group.uuid),
                })
                .get_result::<Runner>(conn)
        });

        match created {
            Ok(created) => {
                info!(target:"models/runner:create", "created runner {} ({} {})", created.number, created.first_name, created.last_name);
                Ok(created)
            }
            Err(error) => {
                error!(target:"models/runner:create", "Error creating runner: {}", error);
                Err(error)
            }
        }
    }

    /********** DELETERS **********/
    /// # delete a runner
    /// delete the runner with the given startnumber and all of its laps
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `number_in` - the startnumber of the runner
    ///
    /// ## Returns
    /// * `bool` - false when no runner had the given number
    pub fn delete(conn: &mut PgConnection, number_in: i32) -> QueryResult<bool> {
        let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(laps::table.filter(laps::runner_number.eq(number_in))).execute(conn)?;
            diesel::delete(runners::table.find(number_in)).execute(conn)
        })?;

        if deleted == 0 {
            warn!(target:"models/runner:delete", "Runner {} not found", number_in);
        } else {
            info!(target:"models/runner:delete", "deleted runner {}", number_in);
        }

        Ok(deleted > 0)
    }

    /********** GETTERS **********/
    pub fn get_by_number(conn: &mut PgConnection, number_in: i32) -> QueryResult<Runner> {
        runners::table.find(number_in).first::<Runner>(conn)
    }

    pub fn exists(conn: &mut PgConnection, number_in: i32) -> QueryResult<bool> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(runners::table.find(number_in))).get_result(conn)
    }

    /// # get all runners with stats
    /// every runner with its group and lap count, ordered by lap count
    /// descending and then by startnumber descending.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    ///
    /// ## Returns
    /// * `Vec<RunnerStanding>` - the ranked runners
    pub fn get_all_standings(conn: &mut PgConnection) -> QueryResult<Vec<RunnerStanding>> {
        sql_query(format!(
            "{STANDINGS_QUERY}
            group by r.number, g.name
            order by count(l.id) desc, r.number desc"
        ))
        .load::<RunnerStanding>(conn)
    }

    /// # get a single runner with stats
    /// fails with `NotFound` when the runner does not exist
    pub fn get_standing(conn: &mut PgConnection, number_in: i32) -> QueryResult<RunnerStanding> {
        sql_query(format!(
            "{STANDINGS_QUERY}
            where r.number = $1
            group by r.number, g.name"
        ))
        .bind::<Integer, _>(number_in)
        .get_result::<RunnerStanding>(conn)
    }
}

/// # Struct representing the runner form
/// used for the json api as well as for the html form.
/// missing fields become empty strings so they fail validation with a message.
#[derive(Deserialize, Serialize, FromForm, UriDisplayQuery, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerForm {
    #[field(name = "firstName", default = String::new())]
    pub first_name: String,
    #[field(name = "lastName", default = String::new())]
    pub last_name: String,
    #[field(default = String::new())]
    pub house: String,
    #[field(default = String::new())]
    pub grade: String,
}

/// a runner form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRunner {
    pub first_name: String,
    pub last_name: String,
    pub house: String,
    pub grade: String,
}

impl RunnerForm {
    /// # validate the form
    /// names are normalized, house and grade must be configured options.
    ///
    /// ## Arguments
    /// * `config` - the config holding the houses and grades
    ///
    /// ## Returns
    /// * `ValidRunner` - the normalized runner
    /// * `Error::InvalidInputError` - with the message to show to the user
    pub fn validate(&self, config: &AppConfig) -> CustomResult<ValidRunner> {
        let first_name = validate_name(&self.first_name, "Vorname")?;
        let last_name = validate_name(&self.last_name, "Nachname")?;

        let house = self.house.trim();
        if house.is_empty() {
            return Err(invalid("Haus fehlt"));
        }
        if !config.houses.iter().any(|name| name == house) {
            return Err(invalid(format!("Unbekanntes Haus: {house}")));
        }

        let grade = self.grade.trim();
        if grade.is_empty() {
            return Err(invalid("Klasse fehlt"));
        }
        if !config.grades.iter().any(|name| name == grade) {
            return Err(invalid(format!("Unbekannte Klasse: {grade}")));
        }

        Ok(ValidRunner {
            first_name,
            last_name,
            house: house.to_string(),
            grade: grade.to_string(),
        })
    }
}

fn validate_name(raw: &str, label: &str) -> CustomResult<String> {
    let name = Helpers::normalize_name(raw);
    if name.is_empty() {
        return Err(invalid(format!("{label} fehlt")));
    }
    if !Helpers::is_valid_name(&name) {
        return Err(invalid(format!("{label} enthält ungültige Zeichen")));
    }

    Ok(name)
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidInputError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            database_url: String::new(),
            redis_url: None,
            houses: vec!["Extern".to_string(), "Nordhaus".to_string()],
            grades: vec!["Keine Klasse".to_string(), "5a".to_string()],
            helper_password: None,
            superadmin_password: None,
        }
    }

    fn form() -> RunnerForm {
        RunnerForm {
            first_name: " Anna  Lena ".to_string(),
            last_name: "Schmidt".to_string(),
            house: "Nordhaus".to_string(),
            grade: "5a".to_string(),
        }
    }

    fn message(result: CustomResult<ValidRunner>) -> String {
        match result {
            Err(Error::InvalidInputError { message }) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_forms_are_normalized() {
        let runner = form().validate(&config()).unwrap();
        assert_eq!(runner.first_name, "Anna Lena");
        assert_eq!(runner.last_name, "Schmidt");
        assert_eq!(runner.house, "Nordhaus");
        assert_eq!(runner.grade, "5a");
    }

    #[test]
    fn every_field_is_required() {
        let config = config();
        assert_eq!(message(RunnerForm { first_name: "  ".into(), ..form() }.validate(&config)), "Vorname fehlt");
        assert_eq!(message(RunnerForm { last_name: String::new(), ..form() }.validate(&config)), "Nachname fehlt");
        assert_eq!(message(RunnerForm { house: String::new(), ..form() }.validate(&config)), "Haus fehlt");
        assert_eq!(message(RunnerForm { grade: String::new(), ..form() }.validate(&config)), "Klasse fehlt");
    }

    #[test]
    fn options_must_be_configured() {
        let config = config();
        assert_eq!(
            message(RunnerForm { house: "Mars".into(), ..form() }.validate(&config)),
            "Unbekanntes Haus: Mars"
        );
        assert_eq!(
            message(RunnerForm { grade: "13z".into(), ..form() }.validate(&config)),
            "Unbekannte Klasse: 13z"
        );
    }

    #[test]
    fn names_with_markup_are_rejected() {
        assert_eq!(
            message(RunnerForm { last_name: "<b>Bold</b>".into(), ..form() }.validate(&config())),
            "Nachname enthält ungültige Zeichen"
        );
    }

    #[test]
    fn missing_json_fields_deserialize_as_empty() {
        let form: RunnerForm = serde_json::from_str(r#"{"firstName": "Anna"}"#).unwrap();
        assert_eq!(form.first_name, "Anna");
        assert!(form.last_name.is_empty());
        assert_eq!(message(form.validate(&config())), "Nachname fehlt");
    }

    #[test]
    fn placeholders_have_no_laps() {
        let placeholder = RunnerStanding::placeholder(2);
        assert_eq!(placeholder.number, 2);
        assert_eq!(placeholder.first_name, "Niemand");
        assert_eq!(placeholder.laps, 0);
        assert!(placeholder.group_name.is_none());
    }
}
