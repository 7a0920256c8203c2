//! Date-of-birth strings.
//!
//! A dob is stored as `year-MM-DD`. Month and day are left-padded with `0` to two
//! characters, so an empty part is stored as `00`; the year is stored as given. No
//! calendar validation happens here.

use std::ops::RangeInclusive;

use crate::constants::MIN_BIRTH_YEAR;

/// Selectable days of the month.
pub const DAYS: RangeInclusive<u8> = 1..=31;

/// Selectable months.
pub const MONTHS: RangeInclusive<u8> = 1..=12;

/// Year, month and day parts of a stored dob. Missing parts are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DobParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// Build a dob string from its parts.
///
/// ```
/// use localaccount::user::dob;
///
/// assert_eq!(dob::compose("1990", "3", "7"), "1990-03-07");
/// assert_eq!(dob::compose("", "", ""), "-00-00");
/// ```
pub fn compose(year: &str, month: &str, day: &str) -> String {
    format!("{year}-{month:0>2}-{day:0>2}")
}

/// Split a stored dob into its parts.
///
/// Extra `-` separated segments beyond the third are ignored.
pub fn split(dob: &str) -> DobParts {
    let mut parts = dob.split('-');
    let mut next = || parts.next().unwrap_or_default().to_string();
    DobParts {
        year: next(),
        month: next(),
        day: next(),
    }
}

/// Selectable birth years, newest first, from `current_year` down to 1900.
pub fn years(current_year: i32) -> impl Iterator<Item = i32> {
    (MIN_BIRTH_YEAR..=current_year).rev()
}
