//! Upcoming birthday scheduling.
//!
//! A birthday is "upcoming" when its next anniversary falls between today
//! and `window_days - 1` days ahead, inclusive. Greetings that land on a
//! weekend are moved to the following Monday, which may push the greeting
//! date past the end of the window.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the lookahead window used by the `birthdays` command.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Name of the contact to congratulate
    pub name: String,

    /// Weekend-adjusted greeting date, formatted `DD.MM.YYYY`
    pub congratulate_on: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.congratulate_on)
    }
}

/// The next anniversary of `birthday` on or after `today`.
pub fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday forward to Monday.
pub fn weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}

/// The greeting date for `birthday` if its anniversary is inside the window.
pub fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let anniversary = next_anniversary(birthday, today)?;
    let delta = (anniversary - today).num_days();
    if (0..i64::from(window_days)).contains(&delta) {
        Some(weekend_to_monday(anniversary))
    } else {
        None
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}
