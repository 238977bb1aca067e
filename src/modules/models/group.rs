use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::groups;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = groups)]
pub struct NewGroup<'a> {
    pub uuid: Uuid,
    pub name: &'a str,
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[diesel(table_name = groups, primary_key(uuid))]
pub struct Group {
    pub uuid: Uuid,
    pub name: String,
}

impl Group {
    /********** INSERTERS **********/
    /// # ensure a group exists
    /// get the group with the given name, creating it when it does not exist yet.
    /// the houses of the runner form are stored as groups.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `name_in` - the name of the group
    ///
    /// ## Returns
    /// * `Group` - the existing or created group
    pub fn ensure_exists(conn: &mut PgConnection, name_in: &str) -> QueryResult<Group> {
        let inserted = diesel::insert_into(groups::table)
            .values(&NewGroup {
                uuid: Uuid::new_v4(),
                name: name_in,
            })
            .on_conflict(groups::name)
            .do_nothing()
            .execute(conn)?;

        if inserted > 0 {
            info!(target:"models/group:ensure_exists", "created group {}", name_in);
        }

        Group::get_by_name(conn, name_in)
    }

    /********** GETTERS **********/
    pub fn get_by_name(conn: &mut PgConnection, name_in: &str) -> QueryResult<Group> {
        use crate::schema::groups::dsl::{groups, name};

        groups.filter(name.eq(name_in)).first::<Group>(conn)
    }

    /// # get all groups
    /// ordered by name
    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Group>> {
        use crate::schema::groups::dsl::{groups, name};

        groups.order(name.asc()).load::<Group>(conn)
    }
}
