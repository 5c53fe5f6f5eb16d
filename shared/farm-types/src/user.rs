use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The unique ID of the authenticated user
    pub user_id: String,
    /// `FarmManager`, `FieldManager` or `Supervisor`
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorPerformance {
    pub supervisor_id: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub completion_percentage: f64,
    #[serde(default)]
    pub name: Option<String>,
}

impl SupervisorPerformance {
    /// Builds the summary, a supervisor without tasks scores zero
    #[must_use]
    pub fn new(
        supervisor_id: impl Into<String>,
        total_tasks: u32,
        completed_tasks: u32,
        name: Option<String>,
    ) -> Self {
        let completion_percentage = if total_tasks == 0 {
            0.0
        } else {
            f64::from(completed_tasks) / f64::from(total_tasks) * 100.0
        };

        Self {
            supervisor_id: supervisor_id.into(),
            total_tasks,
            completed_tasks,
            completion_percentage,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percentage() {
        let performance = SupervisorPerformance::new("sup-1", 8, 6, Some("Asha".to_string()));
        assert!((performance.completion_percentage - 75.0).abs() < f64::EPSILON);

        let idle = SupervisorPerformance::new("sup-2", 0, 0, None);
        assert!(idle.completion_percentage.abs() < f64::EPSILON);
    }
}
