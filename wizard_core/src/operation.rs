use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Backend operations reachable from the form, by path segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    GenerateTableDescription,
    GenerateColumnsDescriptions,
    GenerateDatasetTablesDescriptions
}

impl Operation {
    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GenerateTableDescription => "Generate table description",
            Self::GenerateColumnsDescriptions => "Generate columns descriptions",
            Self::GenerateDatasetTablesDescriptions => "Generate dataset tables descriptions"
        }
    }

    /// `{base}/{operation}`. A single trailing `/` on `base` is dropped;
    /// a plain string join would send `base//operation` instead. Nothing
    /// else about `base` is normalized.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        let base = base.strip_suffix('/').unwrap_or(base);
        format!("{base}/{self}")
    }
}
