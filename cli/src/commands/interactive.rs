use anyhow::Result;
use clap::Args;
use colored::Colorize;
use config::WizardSettings;
use console::Term;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use form::{FormController, SubmitOutcome};
use strum::IntoEnumIterator;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use wizard_core::{Field, FieldKind, FieldValue, GenerationStrategy, Operation};

use super::args::{FormArgs, build_controller};
use crate::{output, ux_error};

#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub form: FormArgs
}

/// Main menu entries.
enum MenuAction {
    Edit,
    Endpoint,
    Show,
    LastResponse,
    Submit(Operation),
    Quit
}

/// Starts `operation` on its own task so the caller can keep editing.
///
/// The request carries the configuration as it is at the moment of the
/// call; later edits only affect later submits.
pub fn spawn_submit(controller: &FormController, operation: Operation) -> JoinHandle<SubmitOutcome> {
    let controller = controller.clone();
    tokio::spawn(async move {
        let outcome = controller.submit(operation).await;
        if outcome.is_success() {
            output::success(&format!("{} finished, see \"Show last response\"", operation));
        } else {
            output::warn(&format!("{} failed", operation));
        }
        outcome
    })
}

pub struct FormSession {
    term: Term,
    theme: ColorfulTheme,
    controller: FormController,
    pending: Vec<JoinHandle<SubmitOutcome>>
}

impl FormSession {
    pub fn new(controller: FormController) -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
            controller,
            pending: Vec::new()
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            match self.select_action()? {
                MenuAction::Edit => self.edit_field()?,
                MenuAction::Endpoint => self.edit_endpoint()?,
                MenuAction::Show => self.show_body()?,
                MenuAction::LastResponse => self.show_last_response(),
                MenuAction::Submit(operation) => self.submit(operation),
                MenuAction::Quit => break
            }
        }

        self.wait_for_pending().await;
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Metadata Wizard".bold().cyan());
        println!(
            "{}",
            "Fill in the configuration, then trigger a generation.".dimmed()
        );
        println!();
    }

    fn select_action(&self) -> Result<MenuAction> {
        let endpoint = self
            .controller
            .endpoint_base()
            .unwrap_or_else(|| "not set".to_string());

        let mut options = vec![
            "Edit a field".to_string(),
            format!("Set endpoint base ({endpoint})"),
            "Show request body".to_string(),
            format!("Show last response ({} pending)", self.pending_count()),
        ];
        let operations: Vec<Operation> = Operation::iter().collect();
        options.extend(operations.iter().map(|op| op.label().to_string()));
        options.push("Quit".to_string());

        let selection = Select::with_theme(&self.theme)
            .with_prompt("What next?")
            .items(&options)
            .default(0)
            .interact_on(&self.term)?;

        let action = match selection {
            0 => MenuAction::Edit,
            1 => MenuAction::Endpoint,
            2 => MenuAction::Show,
            3 => MenuAction::LastResponse,
            n if n < 4 + operations.len() => MenuAction::Submit(operations[n - 4]),
            _ => MenuAction::Quit
        };
        Ok(action)
    }

    fn edit_field(&self) -> Result<()> {
        let configuration = self.controller.configuration();
        let options: Vec<String> = Field::ALL
            .iter()
            .map(|field| format!("{} [{}]", field.label(), describe(&configuration.value(*field))))
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Field")
            .items(&options)
            .default(0)
            .interact_on(&self.term)?;
        let field = Field::ALL[selection];
        let current = configuration.value(field);

        let value = match field.kind() {
            FieldKind::Flag => FieldValue::Flag(
                Confirm::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .default(current.as_flag().unwrap_or(false))
                    .interact_on(&self.term)?
            ),
            FieldKind::Text => FieldValue::Text(
                Input::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .with_initial_text(current.into_text().unwrap_or_default())
                    .allow_empty(true)
                    .interact_text_on(&self.term)?
            ),
            FieldKind::Strategy => {
                let current = configuration.dataset_settings.strategy;
                let labels: Vec<String> = GenerationStrategy::ALL
                    .iter()
                    .map(|s| format!("{} ({})", s.label(), s.code()))
                    .collect();
                let index = Select::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .items(&labels)
                    .default(
                        GenerationStrategy::ALL
                            .iter()
                            .position(|s| *s == current)
                            .unwrap_or(0)
                    )
                    .interact_on(&self.term)?;
                FieldValue::text(GenerationStrategy::ALL[index].code())
            }
        };

        if let Err(err) = self.controller.apply_edit(field, value) {
            ux_error::invalid_edit(&err.to_string()).display();
        }
        Ok(())
    }

    fn edit_endpoint(&self) -> Result<()> {
        let endpoint: String = Input::with_theme(&self.theme)
            .with_prompt("Endpoint base")
            .with_initial_text(self.controller.endpoint_base().unwrap_or_default())
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        self.controller.set_endpoint_base(endpoint);
        Ok(())
    }

    fn show_body(&self) -> Result<()> {
        output::subheader("Request body");
        println!("{}", self.controller.request_body()?);
        Ok(())
    }

    fn show_last_response(&self) {
        output::subheader("Last response");
        match self.controller.last_outcome() {
            Some(outcome) => println!("{}", outcome.to_pretty_json()),
            None => output::info("No request has finished yet")
        }
    }

    fn submit(&mut self, operation: Operation) {
        let missing = self.controller.configuration().missing_fields(operation);
        output::missing_fields(&operation.to_string(), &missing);

        self.pending.retain(|handle| !handle.is_finished());
        debug!(%operation, pending = self.pending.len(), "Spawning submit");
        self.pending.push(spawn_submit(&self.controller, operation));
        output::info(&format!("{} started", operation.label()));
    }

    fn pending_count(&self) -> usize {
        self.pending.iter().filter(|handle| !handle.is_finished()).count()
    }

    async fn wait_for_pending(&mut self) {
        if self.pending_count() > 0 {
            output::info("Waiting for outstanding requests");
        }
        for handle in self.pending.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "Submit task did not complete");
            }
        }
        if let Some(outcome) = self.controller.last_outcome() {
            output::subheader("Last response");
            println!("{}", outcome.to_pretty_json());
        }
    }
}

fn describe(value: &FieldValue) -> String {
    match value {
        FieldValue::Flag(true) => "on".to_string(),
        FieldValue::Flag(false) => "off".to_string(),
        FieldValue::Text(s) if s.is_empty() => "empty".to_string(),
        FieldValue::Text(s) => s.clone()
    }
}

pub async fn run(args: InteractiveArgs, settings: &WizardSettings) -> Result<()> {
    let controller = match build_controller(settings, &args.form) {
        Ok(controller) => controller,
        Err(err) => {
            err.display();
            std::process::exit(1);
        }
    };

    FormSession::new(controller).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_describe_values() {
        assert_eq!(describe(&FieldValue::Flag(true)), "on");
        assert_eq!(describe(&FieldValue::Flag(false)), "off");
        assert_eq!(describe(&FieldValue::text("")), "empty");
        assert_eq!(describe(&FieldValue::text("proj")), "proj");
    }

    #[test]
    fn test_menu_lists_every_operation() {
        assert_eq!(Operation::iter().count(), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_edits_while_submit_pending_do_not_change_sent_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate_table_description"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "done"}))
                    .set_delay(Duration::from_millis(500))
            )
            .expect(1)
            .mount(&server)
            .await;

        let settings = WizardSettings {
            endpoint_base: Some(server.uri()),
            ..WizardSettings::default()
        };
        let form = FormArgs {
            table_id: Some("orders".into()),
            ..FormArgs::default()
        };
        let controller = build_controller(&settings, &form).unwrap();

        let handle = spawn_submit(&controller, Operation::GenerateTableDescription);
        controller
            .apply_edit(Field::TableId, FieldValue::text("customers"))
            .unwrap();
        assert!(!handle.is_finished());
        assert!(controller.last_response().is_none());

        let outcome = handle.await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(controller.last_response(), Some(json!({"status": "done"})));
        assert_eq!(controller.configuration().table_settings.table_id, "customers");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent: Value = requests[0].body_json().unwrap();
        assert_eq!(sent["table_settings"]["table_id"], json!("orders"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_second_submit_while_first_pending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate_table_description"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"op": "table"}))
                    .set_delay(Duration::from_millis(500))
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/generate_columns_descriptions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"op": "columns"})))
            .mount(&server)
            .await;

        let settings = WizardSettings {
            endpoint_base: Some(server.uri()),
            ..WizardSettings::default()
        };
        let controller = build_controller(&settings, &FormArgs::default()).unwrap();

        let slow = spawn_submit(&controller, Operation::GenerateTableDescription);
        let fast = spawn_submit(&controller, Operation::GenerateColumnsDescriptions);
        fast.await.unwrap();
        assert_eq!(controller.last_response(), Some(json!({"op": "columns"})));

        slow.await.unwrap();
        assert_eq!(controller.last_response(), Some(json!({"op": "table"})));
    }
}
