use anyhow::Result;
use clap::Args;
use config::WizardSettings;
use wizard_core::Operation;

use super::args::{FormArgs, build_controller, parse_operation};
use crate::{output, ux_error};

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(
        value_parser = parse_operation,
        help = "generate_table_description, generate_columns_descriptions or generate_dataset_tables_descriptions"
    )]
    pub operation: Operation,

    #[command(flatten)]
    pub form: FormArgs
}

/// Submits the form once and prints the response body (or the failure
/// payload) to stdout. Exits 1 when the submit failed.
pub async fn run(args: GenerateArgs, settings: &WizardSettings) -> Result<()> {
    let controller = match build_controller(settings, &args.form) {
        Ok(controller) => controller,
        Err(err) => {
            err.display();
            std::process::exit(1);
        }
    };

    if controller
        .endpoint_base()
        .is_none_or(|endpoint| endpoint.trim().is_empty())
    {
        ux_error::endpoint_not_set().display();
    }

    let operation = args.operation;
    output::missing_fields(
        &operation.to_string(),
        &controller.configuration().missing_fields(operation)
    );

    let outcome = controller.submit(operation).await;
    println!("{}", outcome.to_pretty_json());

    if !outcome.is_success() {
        ux_error::request_failed(&operation.to_string()).display();
        std::process::exit(1);
    }

    output::success(&format!("{} completed", operation));
    Ok(())
}
