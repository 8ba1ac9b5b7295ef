use anyhow::Result;
use clap::Args;
use config::WizardSettings;
use strum::IntoEnumIterator;
use wizard_core::Operation;

use super::args::{FormArgs, build_controller, parse_operation};
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    #[arg(
        long,
        value_parser = parse_operation,
        help = "Only report missing fields for this operation"
    )]
    pub operation: Option<Operation>,

    #[command(flatten)]
    pub form: FormArgs
}

/// Prints the request body the form would send, without contacting the
/// backend. Target URLs and missing fields go to stderr.
pub fn run(args: ShowArgs, settings: &WizardSettings) -> Result<()> {
    let controller = match build_controller(settings, &args.form) {
        Ok(controller) => controller,
        Err(err) => {
            err.display();
            std::process::exit(1);
        }
    };

    println!("{}", controller.request_body()?);

    let operations: Vec<Operation> = match args.operation {
        Some(operation) => vec![operation],
        None => Operation::iter().collect()
    };
    let configuration = controller.configuration();
    let endpoint = controller
        .endpoint_base()
        .filter(|endpoint| !endpoint.trim().is_empty());

    for operation in operations {
        match &endpoint {
            Some(base) => output::info(&format!("POST {}", operation.url(base))),
            None => output::info(&format!("POST <endpoint not set>/{}", operation))
        }
        output::missing_fields(&operation.to_string(), &configuration.missing_fields(operation));
    }

    Ok(())
}
