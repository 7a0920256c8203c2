//! CLI argument definitions for the localaccount binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use localaccount::user::dob;

/// Local account store: register, log in, and edit a profile
#[derive(Parser, Debug)]
#[command(name = "localaccount")]
#[command(about = "Local account store: registration, login, profiles and sessions")]
#[command(version)]
pub struct Cli {
    /// JSON file holding the key-value store
    #[arg(
        short = 'f',
        long,
        global = true,
        default_value = "localaccount.json",
        env = "LOCALACCOUNT_STORAGE_FILE"
    )]
    pub storage_file: PathBuf,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new user
    Register(RegisterArgs),
    /// Log in, replacing any current session
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session without checking the user still exists
    Whoami,
    /// Show or edit the logged-in user's profile
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Show how many users are registered
    Count,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the logged-in user's profile
    Show,
    /// Edit the logged-in user's profile; omitted fields are kept
    Edit(EditArgs),
}

/// Date of birth parts
#[derive(Args, Debug, Default)]
pub struct DobArgs {
    /// Day of birth (1-31)
    #[arg(long, value_parser = clap::value_parser!(u8).range(*dob::DAYS.start() as i64..=*dob::DAYS.end() as i64))]
    pub day: Option<u8>,

    /// Month of birth (1-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(*dob::MONTHS.start() as i64..=*dob::MONTHS.end() as i64))]
    pub month: Option<u8>,

    /// Year of birth (1900 to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}

impl DobArgs {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Nickname, unique across users
    #[arg(short, long)]
    pub nick: String,

    /// Password (stored as given)
    #[arg(short, long)]
    pub password: String,

    /// Gender
    #[arg(short, long, default_value = "")]
    pub gender: String,

    #[command(flatten)]
    pub dob: DobArgs,

    /// Status line
    #[arg(short, long, default_value = "")]
    pub status: String,
}

/// Arguments for the login command
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Nickname
    #[arg(short, long)]
    pub nick: String,

    /// Password
    #[arg(short, long)]
    pub password: String,
}

/// Arguments for the profile edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// New gender
    #[arg(short, long)]
    pub gender: Option<String>,

    #[command(flatten)]
    pub dob: DobArgs,

    /// New status line
    #[arg(short, long)]
    pub status: Option<String>,
}
