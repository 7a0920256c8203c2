//! Registration, login and session commands.

use localaccount::{Accounts, accounts::NewUser};

use crate::cli::{LoginArgs, RegisterArgs};
use crate::output::{OutputFormat, format_millis, print_user, session_json, user_json};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Run the `register` command
pub fn register(accounts: &Accounts, args: RegisterArgs, format: OutputFormat) -> CmdResult {
    let dob = super::compose_dob(&args.dob, "", accounts.clock().as_ref())?;
    let user = accounts.register(NewUser {
        nickname: args.nick,
        password: args.password,
        gender: args.gender,
        dob,
        status: args.status,
    })?;

    match format {
        OutputFormat::Human => {
            println!("Registered {}. Log in with `localaccount login`.", user.nickname);
            print_user(&user);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&user_json(&user))?),
    }
    Ok(())
}

/// Run the `login` command
pub fn login(accounts: &Accounts, args: LoginArgs, format: OutputFormat) -> CmdResult {
    let session = accounts.login(&args.nick, &args.password)?;
    match format {
        OutputFormat::Human => println!("Logged in as {}", session.nick),
        OutputFormat::Json => println!("{}", serde_json::to_string(&session_json(Some(&session)))?),
    }
    Ok(())
}

/// Run the `logout` command
pub fn logout(accounts: &Accounts, format: OutputFormat) -> CmdResult {
    accounts.logout()?;
    if format == OutputFormat::Human {
        println!("Logged out");
    }
    Ok(())
}

/// Run the `whoami` command
pub fn whoami(accounts: &Accounts, format: OutputFormat) -> CmdResult {
    let session = accounts.whoami()?;
    match format {
        OutputFormat::Human => match session {
            Some(session) => println!(
                "Logged in as {} (since {})",
                session.nick,
                format_millis(session.at)
            ),
            None => println!("Not logged in. Use `localaccount login` or `localaccount register`."),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string(&session_json(session.as_ref()))?),
    }
    Ok(())
}

/// Run the `count` command
pub fn count(accounts: &Accounts, format: OutputFormat) -> CmdResult {
    let count = accounts.user_count()?;
    match format {
        OutputFormat::Human => println!("{count} users"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "users": count })),
    }
    Ok(())
}
