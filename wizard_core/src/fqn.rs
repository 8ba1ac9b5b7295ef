//! Fully qualified BigQuery names.
//!
//! The backend addresses tables as `project.dataset.table` (the legacy
//! `project:dataset.table` form is also accepted) and datasets as
//! `project.dataset`.

use std::fmt;
use std::str::FromStr;

use errors::FqnError;

const TABLE_PATTERN: &str = r"^([^.:]+)[.:]([^.]+)\.([^.]+)$";
const DATASET_PATTERN: &str = r"^([^.:]+)[.:]([^.]+)$";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableFqn {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String
}

impl TableFqn {
    pub fn parse(value: &str) -> Result<Self, FqnError> {
        let malformed = || FqnError::Malformed {
            kind: "table".to_string(),
            value: value.to_string(),
            expected: "project.dataset.table".to_string()
        };

        let re = regex::Regex::new(TABLE_PATTERN).map_err(|_| malformed())?;
        let caps = re.captures(value.trim()).ok_or_else(malformed)?;
        Ok(Self {
            project_id: caps[1].to_string(),
            dataset_id: caps[2].to_string(),
            table_id: caps[3].to_string()
        })
    }
}

impl FromStr for TableFqn {
    type Err = FqnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TableFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetFqn {
    pub project_id: String,
    pub dataset_id: String
}

impl DatasetFqn {
    pub fn parse(value: &str) -> Result<Self, FqnError> {
        let malformed = || FqnError::Malformed {
            kind: "dataset".to_string(),
            value: value.to_string(),
            expected: "project.dataset".to_string()
        };

        let re = regex::Regex::new(DATASET_PATTERN).map_err(|_| malformed())?;
        let caps = re.captures(value.trim()).ok_or_else(malformed)?;
        Ok(Self {
            project_id: caps[1].to_string(),
            dataset_id: caps[2].to_string()
        })
    }
}

impl FromStr for DatasetFqn {
    type Err = FqnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DatasetFqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.project_id, self.dataset_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_fqn() {
        let fqn = TableFqn::parse("my-proj.sales.orders").unwrap();
        assert_eq!(fqn.project_id, "my-proj");
        assert_eq!(fqn.dataset_id, "sales");
        assert_eq!(fqn.table_id, "orders");
        assert_eq!(fqn.to_string(), "my-proj.sales.orders");
    }

    #[test]
    fn test_parse_legacy_table_fqn() {
        let fqn = TableFqn::parse("my-proj:sales.orders").unwrap();
        assert_eq!(fqn.project_id, "my-proj");
        assert_eq!(fqn.dataset_id, "sales");
        assert_eq!(fqn.table_id, "orders");
    }

    #[test]
    fn test_parse_table_fqn_rejects_short_names() {
        assert!(TableFqn::parse("sales.orders").is_err());
        assert!(TableFqn::parse("orders").is_err());
        assert!(TableFqn::parse("a.b.c.d").is_err());
        assert!(TableFqn::parse("").is_err());
    }

    #[test]
    fn test_parse_dataset_fqn() {
        let fqn: DatasetFqn = "my-proj.sales".parse().unwrap();
        assert_eq!(fqn.project_id, "my-proj");
        assert_eq!(fqn.dataset_id, "sales");
        assert_eq!(fqn.to_string(), "my-proj.sales");
        assert!(DatasetFqn::parse("my-proj.sales.orders").is_err());
        assert!(DatasetFqn::parse("my-proj").is_err());
    }
}
