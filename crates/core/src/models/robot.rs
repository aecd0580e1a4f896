use serde::{Deserialize, Serialize};

pub type RobotId = i32;

/// Label written to the `status` column of newly added robots.
///
/// The column is informational only; whether a robot is busy is always
/// derived from the schedule.
pub const DEFAULT_STATUS: &str = "Available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
    pub model: Option<String>,
    pub status: String,
}

impl Robot {
    /// The robot's model, treating an empty string the same as no model.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRobot {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// A robot paired with its schedule-derived engagement at some instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    #[serde(flatten)]
    pub robot: Robot,
    pub engaged: bool,
}
