use crate::Value;
use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeZone;
use chrono::Utc;

/// A record served by the `User` object type.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}
impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Midnight (local time) on the given calendar day.
    pub(crate) fn local_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Local.from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

// A user without a date has no `date` property at all, so that completing it
// without a selection set emits only the fields it actually carries.
impl std::convert::From<User> for Value {
    fn from(user: User) -> Self {
        let mut entries = vec![
            ("id", Value::Int(user.id)),
            ("name", Value::String(user.name)),
        ];
        if let Some(date) = user.date {
            entries.push(("date", Value::DateTime(date)));
        }
        Value::object(entries)
    }
}
