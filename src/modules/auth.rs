use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::{CustomResult, Error};

/// name of the private cookie holding the role of the logged in user
pub const ROLE_COOKIE: &str = "user_role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Helper,
    Superadmin,
}

/// roles allowed to see runners and record laps
pub const STAFF: &[Role] = &[Role::Helper, Role::Superadmin];
/// roles allowed to create and delete runners
pub const SUPERADMIN_ONLY: &[Role] = &[Role::Superadmin];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Helper => "helper",
            Role::Superadmin => "superadmin",
        }
    }

    /// # find the role for a password
    /// compares the password with the configured role passwords.
    /// roles without a configured password can never match.
    ///
    /// ## Arguments
    /// * `config` - the app config holding the passwords
    /// * `password` - the password entered on the login page
    pub fn for_password(config: &AppConfig, password: &str) -> Option<Role> {
        if password.is_empty() {
            return None;
        }

        if config.superadmin_password.as_deref() == Some(password) {
            Some(Role::Superadmin)
        } else if config.helper_password.as_deref() == Some(password) {
            Some(Role::Helper)
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "helper" => Ok(Role::Helper),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(format!("unknown role {s}")),
        }
    }
}

/// # the session of the current request
/// read from the private role cookie. a missing or unreadable cookie
/// is an anonymous session, never a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub user_role: Option<Role>,
}

impl Session {
    pub fn new(user_role: Option<Role>) -> Session {
        Session { user_role }
    }

    /// true when the session has one of the allowed roles
    pub fn has_any(&self, allowed: &[Role]) -> bool {
        self.user_role.map_or(false, |role| allowed.contains(&role))
    }

    /// # require one of the allowed roles
    ///
    /// ## Returns
    /// * `Role` - the role of the session
    /// * `Error::ForbiddenError` - when the role is missing or not allowed
    pub fn require(&self, allowed: &[Role]) -> CustomResult<Role> {
        match self.user_role {
            Some(role) if allowed.contains(&role) => Ok(role),
            _ => Err(Error::ForbiddenError),
        }
    }

    pub fn login(cookies: &CookieJar<'_>, role: Role) {
        let mut cookie = Cookie::new(ROLE_COOKIE, role.as_str());
        cookie.set_same_site(SameSite::Lax);
        cookie.set_http_only(true);
        cookies.add_private(cookie);
    }

    /// read the role from the private cookie, anonymous when missing or unreadable
    pub fn from_cookies(cookies: &CookieJar<'_>) -> Session {
        let user_role = cookies
            .get_private(ROLE_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok());

        Session { user_role }
    }

    pub fn logout(cookies: &CookieJar<'_>) {
        cookies.remove_private(ROLE_COOKIE);
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(Session::from_cookies(request.cookies()))
    }
}
