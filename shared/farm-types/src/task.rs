use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status given to tasks created without one
pub const DEFAULT_TASK_STATUS: &str = "Pending";

fn default_status() -> String {
    DEFAULT_TASK_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TaskBase {
    #[serde(rename = "type")]
    pub task_type: String,
    pub task: String,
    pub plot: String,
    #[validate(length(min = 1))]
    pub supervisor_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Inventory item consumed by the task
    #[serde(default)]
    pub required_item_id: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub required_quantity: Option<f64>,
}

pub type TaskCreate = TaskBase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub base: TaskBase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1))]
    pub status: String,
}
