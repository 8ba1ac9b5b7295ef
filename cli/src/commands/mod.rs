pub mod args;
pub mod completion;
pub mod generate;
pub mod interactive;
pub mod show;

use clap::{Parser, Subcommand};

use args::SettingsArgs;

#[derive(Parser)]
#[command(
    name = "metadata-wizard",
    author,
    version,
    about = "Metadata Wizard - configure and trigger BigQuery metadata generation",
    long_about = "Fill in the client, table and dataset settings, then post them to one of the \
                  three generation operations.\n\nSettings come from --flags, METADATA_WIZARD_* \
                  env vars and an optional --config file, in that order of precedence."
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Submit the form to one operation and print the response")]
    Generate(generate::GenerateArgs),

    #[command(about = "Print the request body without contacting the backend")]
    Show(show::ShowArgs),

    #[command(about = "Edit the form and trigger operations from a menu")]
    Interactive(interactive::InteractiveArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wizard_core::Operation;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_global_settings_after_subcommand() {
        let cli = Cli::try_parse_from([
            "metadata-wizard",
            "generate",
            "generate_table_description",
            "--table",
            "p.d.t",
            "--endpoint",
            "http://localhost:8080"
        ])
        .unwrap();

        assert_eq!(cli.settings.endpoint.as_deref(), Some("http://localhost:8080"));
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.operation, Operation::GenerateTableDescription);
                assert_eq!(args.form.table.unwrap().table_id, "t");
            }
            _ => panic!("expected generate")
        }
    }

    #[test]
    fn test_parse_rejects_malformed_table() {
        let result = Cli::try_parse_from(["metadata-wizard", "show", "--table", "just-a-table"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_strategy_by_name() {
        let cli =
            Cli::try_parse_from(["metadata-wizard", "show", "--strategy", "documented"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.form.strategy.map(|s| s.code()), Some("2"));
            }
            _ => panic!("expected show")
        }
    }
}
