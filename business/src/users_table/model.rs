//! Wire types of the random-user API and the row shape the table displays.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Upper bound on rows kept from a single response.
pub const BATCH_SIZE: usize = 10;

/// `{ "results": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUsersResponse {
    pub results: Vec<RandomUser>,
}

/// One record of `results`. Fields the table does not show are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUser {
    pub login: Login,
    pub name: PersonName,
    pub email: String,
    pub gender: String,
    pub registered: Registered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registered {
    pub date: String,
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    /// First and last name joined by a single space.
    pub name: String,
    pub email: String,
    pub gender: String,
    /// Raw registration timestamp as received.
    pub register_date: String,
}

impl UserRow {
    /// Registration date as `DD/MM/YYYY`.
    pub fn register_date_display(&self) -> String {
        format_register_date(&self.register_date)
    }
}

impl From<RandomUser> for UserRow {
    fn from(user: RandomUser) -> Self {
        Self {
            username: user.login.username,
            name: format!("{} {}", user.name.first, user.name.last),
            email: user.email,
            gender: user.gender,
            register_date: user.registered.date,
        }
    }
}

impl RandomUsersResponse {
    /// Maps `results` into rows, keeping at most [`BATCH_SIZE`].
    pub fn into_rows(self) -> Vec<UserRow> {
        self.results
            .into_iter()
            .take(BATCH_SIZE)
            .map(UserRow::from)
            .collect()
    }
}

/// Formats an RFC 3339 timestamp or a `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Timestamps keep their own offset. Anything else is returned unchanged.
pub fn format_register_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
