use std::fmt;
use std::str::FromStr;

use errors::FormError;
use serde::{Deserialize, Serialize};

use crate::fields::{Field, FieldValue};
use crate::operation::Operation;

/// Dataset processing approach requested from the backend.
///
/// Travels on the wire as its string code (`"1"`, `"2"`, `"3"`), which is
/// what the strategy selector produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenerationStrategy {
    #[default]
    #[serde(rename = "1")]
    Naive,
    #[serde(rename = "2")]
    Documented,
    #[serde(rename = "3")]
    DocumentedThenRest
}

impl GenerationStrategy {
    pub const ALL: [GenerationStrategy; 3] = [
        GenerationStrategy::Naive,
        GenerationStrategy::Documented,
        GenerationStrategy::DocumentedThenRest
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Naive => "1",
            Self::Documented => "2",
            Self::DocumentedThenRest => "3"
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Documented => "Documented",
            Self::DocumentedThenRest => "Documented then rest"
        }
    }

    /// Whether the backend reads `documentation_csv_uri` for this strategy.
    #[must_use]
    pub fn uses_documentation_csv(self) -> bool {
        matches!(self, Self::Documented | Self::DocumentedThenRest)
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for GenerationStrategy {
    type Err = FormError;

    /// Accepts the wire code (`"2"`) or the backend name (`"DOCUMENTED"`,
    /// `"documented-then-rest"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "1" | "NAIVE" => Ok(Self::Naive),
            "2" | "DOCUMENTED" => Ok(Self::Documented),
            "3" | "DOCUMENTED_THEN_REST" => Ok(Self::DocumentedThenRest),
            _ => Err(FormError::InvalidStrategy {
                value: s.to_string()
            })
        }
    }
}

/// Optional metadata sources the backend may fold into its prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptionsSettings {
    pub use_lineage_tables: bool,
    pub use_lineage_processes: bool,
    pub use_profile: bool,
    pub use_data_quality: bool,
    pub use_ext_documents: bool
}

/// Project and regions the backend client is created with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub project_id: String,
    pub llm_location: String,
    pub dataplex_location: String
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    pub documentation_uri: String
}

impl TableSettings {
    /// `project.dataset.table`, as the backend addresses tables.
    #[must_use]
    pub fn fqn(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

/// Dataset-wide generation settings.
///
/// `project_id` and `dataset_id` mirror [`TableSettings`]; they are only
/// written through table edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSettings {
    pub project_id: String,
    pub dataset_id: String,
    pub documentation_csv_uri: String,
    pub strategy: GenerationStrategy
}

impl DatasetSettings {
    /// `project.dataset`, as the backend addresses datasets.
    #[must_use]
    pub fn fqn(&self) -> String {
        format!("{}.{}", self.project_id, self.dataset_id)
    }
}

/// Request body for every backend operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub client_options_settings: ClientOptionsSettings,
    pub client_settings: ClientSettings,
    pub table_settings: TableSettings,
    pub dataset_settings: DatasetSettings
}

impl Configuration {
    /// Returns a copy of `self` with `field` replaced by `value`.
    ///
    /// Writes to `table_settings.project_id` and `table_settings.dataset_id`
    /// are copied into the matching `dataset_settings` field. Every other
    /// field is written on its own.
    pub fn with_edit(&self, field: Field, value: FieldValue) -> Result<Self, FormError> {
        let mut next = self.clone();
        next.write(field, value)?;
        Ok(next)
    }

    fn write(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let kind_mismatch = || FormError::ValueKindMismatch {
            field: field.path(),
            expected: field.kind().to_string()
        };

        if let Some(slot) = self.flag_mut(field) {
            *slot = value.as_flag().ok_or_else(kind_mismatch)?;
            return Ok(());
        }

        let text = value.into_text().ok_or_else(kind_mismatch)?;
        match field {
            Field::Strategy => {
                self.dataset_settings.strategy = text.parse()?;
            }
            Field::TableProjectId => {
                self.dataset_settings.project_id.clone_from(&text);
                self.table_settings.project_id = text;
            }
            Field::TableDatasetId => {
                self.dataset_settings.dataset_id.clone_from(&text);
                self.table_settings.dataset_id = text;
            }
            _ => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
        }
        Ok(())
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        let options = &mut self.client_options_settings;
        match field {
            Field::UseLineageTables => Some(&mut options.use_lineage_tables),
            Field::UseLineageProcesses => Some(&mut options.use_lineage_processes),
            Field::UseProfile => Some(&mut options.use_profile),
            Field::UseDataQuality => Some(&mut options.use_data_quality),
            Field::UseExtDocuments => Some(&mut options.use_ext_documents),
            _ => None
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::ClientProjectId => Some(&mut self.client_settings.project_id),
            Field::LlmLocation => Some(&mut self.client_settings.llm_location),
            Field::DataplexLocation => Some(&mut self.client_settings.dataplex_location),
            Field::TableProjectId => Some(&mut self.table_settings.project_id),
            Field::TableDatasetId => Some(&mut self.table_settings.dataset_id),
            Field::TableId => Some(&mut self.table_settings.table_id),
            Field::DocumentationUri => Some(&mut self.table_settings.documentation_uri),
            Field::DocumentationCsvUri => Some(&mut self.dataset_settings.documentation_csv_uri),
            _ => None
        }
    }

    /// Current value of an editable field.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue {
        let options = &self.client_options_settings;
        match field {
            Field::UseLineageTables => FieldValue::Flag(options.use_lineage_tables),
            Field::UseLineageProcesses => FieldValue::Flag(options.use_lineage_processes),
            Field::UseProfile => FieldValue::Flag(options.use_profile),
            Field::UseDataQuality => FieldValue::Flag(options.use_data_quality),
            Field::UseExtDocuments => FieldValue::Flag(options.use_ext_documents),
            Field::ClientProjectId => FieldValue::text(&self.client_settings.project_id),
            Field::LlmLocation => FieldValue::text(&self.client_settings.llm_location),
            Field::DataplexLocation => FieldValue::text(&self.client_settings.dataplex_location),
            Field::TableProjectId => FieldValue::text(&self.table_settings.project_id),
            Field::TableDatasetId => FieldValue::text(&self.table_settings.dataset_id),
            Field::TableId => FieldValue::text(&self.table_settings.table_id),
            Field::DocumentationUri => FieldValue::text(&self.table_settings.documentation_uri),
            Field::DocumentationCsvUri => {
                FieldValue::text(&self.dataset_settings.documentation_csv_uri)
            }
            Field::Strategy => FieldValue::text(self.dataset_settings.strategy.code())
        }
    }

    /// Fields the backend needs for `operation` that are still empty.
    ///
    /// Presence only. Nothing here stops a submit.
    #[must_use]
    pub fn missing_fields(&self, operation: Operation) -> Vec<Field> {
        let mut required = vec![
            Field::ClientProjectId,
            Field::LlmLocation,
            Field::DataplexLocation,
            Field::TableProjectId,
            Field::TableDatasetId
        ];
        match operation {
            Operation::GenerateTableDescription | Operation::GenerateColumnsDescriptions => {
                required.push(Field::TableId);
            }
            Operation::GenerateDatasetTablesDescriptions => {
                if self.dataset_settings.strategy.uses_documentation_csv() {
                    required.push(Field::DocumentationCsvUri);
                }
            }
        }

        required
            .into_iter()
            .filter(|field| matches!(self.value(*field), FieldValue::Text(ref s) if s.trim().is_empty()))
            .collect()
    }
}
