use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ProfileCommands};
use output::OutputFormat;

fn main() {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` when set, `localaccount=warn` otherwise.
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("localaccount=warn"))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::from_flag(cli.json);
    let accounts = backend::open_accounts(&cli.storage_file)?;

    match cli.command {
        Commands::Register(args) => commands::account::register(&accounts, args, format),
        Commands::Login(args) => commands::account::login(&accounts, args, format),
        Commands::Logout => commands::account::logout(&accounts, format),
        Commands::Whoami => commands::account::whoami(&accounts, format),
        Commands::Profile(ProfileCommands::Show) => commands::profile::show(&accounts, format),
        Commands::Profile(ProfileCommands::Edit(args)) => {
            commands::profile::edit(&accounts, args, format)
        }
        Commands::Count => commands::account::count(&accounts, format),
    }
}
