//! Subcommand implementations.

pub mod account;
pub mod profile;

use localaccount::{Clock, constants::MIN_BIRTH_YEAR, user::dob};

use crate::cli::DobArgs;

/// Check the year against the selectable range and compose a dob string.
///
/// Parts not given on the command line are taken from `fallback`, a previously stored dob.
pub(crate) fn compose_dob(
    args: &DobArgs,
    fallback: &str,
    clock: &dyn Clock,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(year) = args.year {
        let current = clock.current_year();
        if !dob::years(current).any(|y| y == year) {
            return Err(format!("year must be between {MIN_BIRTH_YEAR} and {current}").into());
        }
    }

    let stored = dob::split(fallback);
    let year = args.year.map(|y| y.to_string()).unwrap_or(stored.year);
    let month = args.month.map(|m| m.to_string()).unwrap_or(stored.month);
    let day = args.day.map(|d| d.to_string()).unwrap_or(stored.day);
    Ok(dob::compose(&year, &month, &day))
}
