use crate::libs::error::{HourlyError, HourlyResult};
use crate::libs::rate::validate_rate;
use serde::{Deserialize, Serialize};

/// Display color given to projects created without one.
pub const DEFAULT_PROJECT_COLOR: &str = "#3b82f6";

/// A billable work grouping with a standing hourly rate.
///
/// Projects are never physically removed: archiving flips `active` to
/// `false` so historical entries keep their reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub default_hourly_rate: f64,
    pub color: String,
    pub active: bool,
}

impl Project {
    pub fn new(name: &str, default_hourly_rate: f64) -> Self {
        Project {
            id: None,
            name: name.to_string(),
            description: None,
            default_hourly_rate,
            color: DEFAULT_PROJECT_COLOR.to_string(),
            active: true,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        if let Some(color) = color.filter(|c| !c.trim().is_empty()) {
            self.color = color;
        }
        self
    }

    /// Checks the fields a project must have before it is stored.
    pub fn validate(&self) -> HourlyResult<()> {
        if self.name.trim().is_empty() {
            return Err(HourlyError::InvalidInput("project name is required".to_string()));
        }
        validate_rate(self.default_hourly_rate)?;
        Ok(())
    }
}
