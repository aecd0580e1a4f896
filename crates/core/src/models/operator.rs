use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OpsError;

pub type OperatorId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorRole {
    #[serde(rename = "Senior Engineer")]
    SeniorEngineer,
    #[serde(rename = "Field Technician")]
    FieldTechnician,
}

impl OperatorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorRole::SeniorEngineer => "Senior Engineer",
            OperatorRole::FieldTechnician => "Field Technician",
        }
    }
}

impl fmt::Display for OperatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorRole {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Senior Engineer" => Ok(OperatorRole::SeniorEngineer),
            "Field Technician" => Ok(OperatorRole::FieldTechnician),
            other => Err(OpsError::Validation(format!(
                "Unknown operator role {:?}; expected \"Senior Engineer\" or \"Field Technician\"",
                other
            ))),
        }
    }
}

/// Separator of the persisted qualified-models column.
pub const MODEL_SEPARATOR: char = ',';

/// The set of robot models an operator is trained on.
///
/// Persisted as a single comma-joined column. Parsing trims each item and
/// drops empty ones, so `"Spot, Atlas,"` and `"Atlas,Spot"` are equal.
///
/// Models must not contain [`MODEL_SEPARATOR`]; the registry refuses such
/// names before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedModels(BTreeSet<String>);

impl QualifiedModels {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            models
                .into_iter()
                .map(Into::into)
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
        )
    }

    pub fn from_column(column: &str) -> Self {
        Self::new(column.split(MODEL_SEPARATOR))
    }

    pub fn to_column(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, model: &str) -> bool {
        self.0.contains(model)
    }

    /// Case-sensitive substring containment within the normalized column, i.e.
    /// the trimmed, sorted, comma-joined rendering of the set rather than the
    /// raw stored text. Matches "Spot" against an operator trained only on
    /// "SpotMini".
    pub fn column_contains(&self, model: &str) -> bool {
        self.to_column().contains(model)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: OperatorId,
    pub name: String,
    pub role: OperatorRole,
    pub qualified_models: QualifiedModels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOperator {
    pub name: String,
    pub role: OperatorRole,
    #[serde(default)]
    pub qualified_models: QualifiedModels,
}
