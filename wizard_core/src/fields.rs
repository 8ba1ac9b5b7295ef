use std::fmt;
use std::str::FromStr;

use errors::FormError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The four nested groups of a [`crate::Configuration`], by wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SettingsGroup {
    ClientOptionsSettings,
    ClientSettings,
    TableSettings,
    DatasetSettings
}

impl SettingsGroup {
    /// Resolves a wire name such as `"table_settings"`.
    pub fn parse(name: &str) -> Result<Self, FormError> {
        Self::from_str(name).map_err(|_| FormError::UnknownGroup {
            group: name.to_string()
        })
    }
}

/// What a control produces for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldKind {
    #[strum(serialize = "boolean")]
    Flag,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "strategy code")]
    Strategy
}

/// Every user-editable field of the configuration.
///
/// `dataset_settings.project_id` and `dataset_settings.dataset_id` are not
/// listed: they only change through [`Field::TableProjectId`] and
/// [`Field::TableDatasetId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UseLineageTables,
    UseLineageProcesses,
    UseProfile,
    UseDataQuality,
    UseExtDocuments,
    ClientProjectId,
    LlmLocation,
    DataplexLocation,
    TableProjectId,
    TableDatasetId,
    TableId,
    DocumentationUri,
    DocumentationCsvUri,
    Strategy
}

impl Field {
    /// Form order: toggles, client settings, table settings, dataset settings.
    pub const ALL: [Field; 14] = [
        Field::UseLineageTables,
        Field::UseLineageProcesses,
        Field::UseProfile,
        Field::UseDataQuality,
        Field::UseExtDocuments,
        Field::ClientProjectId,
        Field::LlmLocation,
        Field::DataplexLocation,
        Field::TableProjectId,
        Field::TableDatasetId,
        Field::TableId,
        Field::DocumentationUri,
        Field::DocumentationCsvUri,
        Field::Strategy
    ];

    #[must_use]
    pub fn group(self) -> SettingsGroup {
        match self {
            Self::UseLineageTables
            | Self::UseLineageProcesses
            | Self::UseProfile
            | Self::UseDataQuality
            | Self::UseExtDocuments => SettingsGroup::ClientOptionsSettings,
            Self::ClientProjectId | Self::LlmLocation | Self::DataplexLocation => {
                SettingsGroup::ClientSettings
            }
            Self::TableProjectId | Self::TableDatasetId | Self::TableId | Self::DocumentationUri => {
                SettingsGroup::TableSettings
            }
            Self::DocumentationCsvUri | Self::Strategy => SettingsGroup::DatasetSettings
        }
    }

    /// Field name inside its group.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::UseLineageTables => "use_lineage_tables",
            Self::UseLineageProcesses => "use_lineage_processes",
            Self::UseProfile => "use_profile",
            Self::UseDataQuality => "use_data_quality",
            Self::UseExtDocuments => "use_ext_documents",
            Self::ClientProjectId | Self::TableProjectId => "project_id",
            Self::LlmLocation => "llm_location",
            Self::DataplexLocation => "dataplex_location",
            Self::TableDatasetId => "dataset_id",
            Self::TableId => "table_id",
            Self::DocumentationUri => "documentation_uri",
            Self::DocumentationCsvUri => "documentation_csv_uri",
            Self::Strategy => "strategy"
        }
    }

    /// `group.field`, e.g. `table_settings.project_id`.
    #[must_use]
    pub fn path(self) -> String {
        format!("{}.{}", self.group(), self.name())
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self.group() {
            SettingsGroup::ClientOptionsSettings => FieldKind::Flag,
            _ if self == Self::Strategy => FieldKind::Strategy,
            _ => FieldKind::Text
        }
    }

    /// Human label used by prompts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UseLineageTables => "Use lineage tables",
            Self::UseLineageProcesses => "Use lineage processes",
            Self::UseProfile => "Use profile",
            Self::UseDataQuality => "Use data quality",
            Self::UseExtDocuments => "Use external documents",
            Self::ClientProjectId => "Client project ID",
            Self::LlmLocation => "LLM location",
            Self::DataplexLocation => "Dataplex location",
            Self::TableProjectId => "Table project ID",
            Self::TableDatasetId => "Table dataset ID",
            Self::TableId => "Table ID",
            Self::DocumentationUri => "Documentation URI",
            Self::DocumentationCsvUri => "Documentation CSV URI",
            Self::Strategy => "Strategy"
        }
    }

    /// Resolves a `(group, field)` pair as produced by the form controls.
    pub fn parse(group: &str, name: &str) -> Result<Self, FormError> {
        let group = SettingsGroup::parse(group)?;

        if group == SettingsGroup::DatasetSettings && matches!(name, "project_id" | "dataset_id") {
            return Err(FormError::DerivedField {
                group: group.to_string(),
                field: name.to_string()
            });
        }

        Self::ALL
            .into_iter()
            .find(|field| field.group() == group && field.name() == name)
            .ok_or_else(|| FormError::UnknownField {
                group: group.to_string(),
                field: name.to_string()
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The effective value of a control: checkbox state or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String)
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
