use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use client::HttpMetadataBackend;
use config::{ResponseOrdering, SettingsError, SettingsOverlay, WizardSettings};
use form::FormController;
use wizard_core::{DatasetFqn, Field, FieldValue, GenerationStrategy, Operation, TableFqn};

use crate::ux_error::{self, UxError};

/// Settings flags shared by every subcommand. They win over env vars and the
/// settings file.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    #[arg(long, global = true, help = "Settings file (.toml, .yaml or .yml)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Endpoint base address, e.g. http://localhost:8080")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Per-request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(
        long,
        global = true,
        value_parser = parse_ordering,
        help = "Which response wins when submits overlap (last_write_wins, latest_request_wins)"
    )]
    pub response_ordering: Option<ResponseOrdering>,

    #[arg(long, global = true, help = "Log level used when RUST_LOG is unset")]
    pub log_level: Option<String>
}

impl SettingsArgs {
    pub fn overlay(&self) -> Option<SettingsOverlay> {
        let overlay = SettingsOverlay {
            endpoint_base: self.endpoint.clone(),
            request_timeout_secs: self.timeout_secs,
            response_ordering: self.response_ordering,
            log_level: self.log_level.clone()
        };
        (!overlay.is_empty()).then_some(overlay)
    }

    pub fn resolve(&self) -> Result<WizardSettings, SettingsError> {
        config::resolve(self.config.as_deref(), self.overlay())
    }
}

/// One flag per form control, plus FQN shortcuts for the table fields.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    #[arg(long, help = "Use lineage tables")]
    pub use_lineage_tables: bool,

    #[arg(long, help = "Use lineage processes")]
    pub use_lineage_processes: bool,

    #[arg(long, help = "Use profile")]
    pub use_profile: bool,

    #[arg(long, help = "Use data quality")]
    pub use_data_quality: bool,

    #[arg(long, help = "Use external documents")]
    pub use_ext_documents: bool,

    #[arg(long, help = "Client project ID")]
    pub project_id: Option<String>,

    #[arg(long, help = "LLM location")]
    pub llm_location: Option<String>,

    #[arg(long, help = "Dataplex location")]
    pub dataplex_location: Option<String>,

    #[arg(
        long,
        value_parser = parse_table_fqn,
        help = "Table as project.dataset.table (sets table project, dataset and ID)"
    )]
    pub table: Option<TableFqn>,

    #[arg(
        long,
        value_parser = parse_dataset_fqn,
        help = "Dataset as project.dataset (sets table project and dataset)"
    )]
    pub dataset: Option<DatasetFqn>,

    #[arg(long, help = "Table project ID")]
    pub table_project_id: Option<String>,

    #[arg(long, help = "Table dataset ID")]
    pub table_dataset_id: Option<String>,

    #[arg(long, help = "Table ID")]
    pub table_id: Option<String>,

    #[arg(long, help = "Documentation URI")]
    pub documentation_uri: Option<String>,

    #[arg(long, help = "Documentation CSV URI")]
    pub documentation_csv_uri: Option<String>,

    #[arg(
        long,
        value_parser = parse_strategy,
        help = "Strategy code (1 naive, 2 documented, 3 documented then rest)"
    )]
    pub strategy: Option<GenerationStrategy>
}

impl FormArgs {
    /// Edits in control order. FQN shortcuts come first so explicit field
    /// flags override them.
    pub fn edits(&self) -> Vec<(Field, FieldValue)> {
        let mut edits = Vec::new();

        if let Some(dataset) = &self.dataset {
            edits.push((Field::TableProjectId, dataset.project_id.as_str().into()));
            edits.push((Field::TableDatasetId, dataset.dataset_id.as_str().into()));
        }
        if let Some(table) = &self.table {
            edits.push((Field::TableProjectId, table.project_id.as_str().into()));
            edits.push((Field::TableDatasetId, table.dataset_id.as_str().into()));
            edits.push((Field::TableId, table.table_id.as_str().into()));
        }

        let flags = [
            (Field::UseLineageTables, self.use_lineage_tables),
            (Field::UseLineageProcesses, self.use_lineage_processes),
            (Field::UseProfile, self.use_profile),
            (Field::UseDataQuality, self.use_data_quality),
            (Field::UseExtDocuments, self.use_ext_documents)
        ];
        edits.extend(
            flags
                .into_iter()
                .filter(|(_, on)| *on)
                .map(|(field, on)| (field, FieldValue::Flag(on)))
        );

        let texts = [
            (Field::ClientProjectId, &self.project_id),
            (Field::LlmLocation, &self.llm_location),
            (Field::DataplexLocation, &self.dataplex_location),
            (Field::TableProjectId, &self.table_project_id),
            (Field::TableDatasetId, &self.table_dataset_id),
            (Field::TableId, &self.table_id),
            (Field::DocumentationUri, &self.documentation_uri),
            (Field::DocumentationCsvUri, &self.documentation_csv_uri)
        ];
        edits.extend(
            texts
                .into_iter()
                .filter_map(|(field, value)| value.clone().map(|v| (field, FieldValue::Text(v))))
        );

        if let Some(strategy) = self.strategy {
            edits.push((Field::Strategy, FieldValue::text(strategy.code())));
        }

        edits
    }
}

/// Controller over the HTTP backend with `form` applied.
pub fn build_controller(settings: &WizardSettings, form: &FormArgs) -> Result<FormController, UxError> {
    let backend = HttpMetadataBackend::from_settings(settings)
        .map_err(|e| ux_error::transport_setup_failed(&e.to_string()))?;
    let controller = FormController::from_settings(Arc::new(backend), settings);

    for (field, value) in form.edits() {
        controller
            .apply_edit(field, value)
            .map_err(|e| ux_error::invalid_edit(&e.to_string()))?;
    }

    Ok(controller)
}

pub fn parse_operation(value: &str) -> Result<Operation, String> {
    value.parse::<Operation>().map_err(|_| {
        format!(
            "unknown operation '{value}' (expected generate_table_description, \
             generate_columns_descriptions or generate_dataset_tables_descriptions)"
        )
    })
}

fn parse_ordering(value: &str) -> Result<ResponseOrdering, String> {
    value
        .parse::<ResponseOrdering>()
        .map_err(|_| format!("unknown response ordering '{value}'"))
}

fn parse_strategy(value: &str) -> Result<GenerationStrategy, String> {
    value.parse::<GenerationStrategy>().map_err(|e| e.to_string())
}

fn parse_table_fqn(value: &str) -> Result<TableFqn, String> {
    TableFqn::parse(value).map_err(|e| e.to_string())
}

fn parse_dataset_fqn(value: &str) -> Result<DatasetFqn, String> {
    DatasetFqn::parse(value).map_err(|e| e.to_string())
}
