//! Profile commands for the logged-in user.

use localaccount::{Accounts, accounts::ProfileUpdate};

use crate::cli::EditArgs;
use crate::output::{OutputFormat, print_user, user_json};

/// Run the `profile show` command
pub fn show(accounts: &Accounts, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let user = accounts.current_user()?;
    match format {
        OutputFormat::Human => print_user(&user),
        OutputFormat::Json => println!("{}", serde_json::to_string(&user_json(&user))?),
    }
    Ok(())
}

/// Run the `profile edit` command
pub fn edit(
    accounts: &Accounts,
    args: EditArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = accounts.current_user()?;
    let dob = if args.dob.is_empty() {
        None
    } else {
        Some(super::compose_dob(
            &args.dob,
            &current.dob,
            accounts.clock().as_ref(),
        )?)
    };

    let user = accounts.update_profile(ProfileUpdate {
        gender: args.gender,
        dob,
        status: args.status,
    })?;

    match format {
        OutputFormat::Human => {
            println!("Saved");
            print_user(&user);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&user_json(&user))?),
    }
    Ok(())
}
