use anyhow::Result;
use clap::Parser;
use config::WizardSettings;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;
pub mod ux_error;

use commands::args::SettingsArgs;
use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &init(&cli.settings)).await,
        Commands::Show(args) => commands::show::run(args, &init(&cli.settings)),
        Commands::Interactive(args) => {
            commands::interactive::run(args, &init(&cli.settings)).await
        }
        Commands::Completion(args) => commands::completion::run(args),
    }
}

/// Resolves settings and installs the log subscriber. `RUST_LOG` wins over
/// the configured log level. Logs go to stderr so stdout stays pipeable.
fn init(args: &SettingsArgs) -> WizardSettings {
    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(err) => {
            ux_error::invalid_settings(&err.to_string()).display();
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    settings
}
