//! Schedule definition files
//!
//! A definition names a step count and any number of schedules, each a
//! [`DecayPolicy`] plus a column name:
//!
//! ```toml
//! n_steps = 100
//!
//! [[schedules]]
//! name = "lr"
//! policy = "cosine_decay"
//! initial_value = 0.1
//! alpha = 0.01
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use crate::render::{ScheduleColumn, ScheduleTable};
use crate::{CliError, Result};
use schedule_core::{DecayPolicy, ScheduleGenerator};

/// One named schedule in a definition file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedSchedule {
    /// Column name in the rendered output
    pub name: String,
    /// Policy and its parameters
    #[serde(flatten)]
    pub policy: DecayPolicy<f64>,
}

/// Contents of a schedule definition file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleDefinition {
    /// Number of steps shared by every schedule
    pub n_steps: usize,
    /// Schedules to evaluate, in output order
    #[serde(default)]
    pub schedules: Vec<NamedSchedule>,
}

impl ScheduleDefinition {
    /// Load and validate a definition from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a definition from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let definition: ScheduleDefinition = toml::from_str(content)
            .map_err(|e| CliError::InvalidDefinition(format!("Failed to parse TOML: {}", e)))?;

        definition.validate()?;
        Ok(definition)
    }

    /// Single-schedule definition, used by the `policy` command
    pub fn single(n_steps: usize, policy: DecayPolicy<f64>) -> Self {
        Self {
            n_steps,
            schedules: vec![NamedSchedule {
                name: policy.name().to_string(),
                policy,
            }],
        }
    }

    /// Check names and policy shapes before any generator is built
    pub fn validate(&self) -> Result<()> {
        if self.schedules.is_empty() {
            return Err(CliError::InvalidDefinition(
                "at least one [[schedules]] entry is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for schedule in &self.schedules {
            if schedule.name.trim().is_empty() {
                return Err(CliError::InvalidDefinition(
                    "schedule names must not be empty".to_string(),
                ));
            }
            if !seen.insert(schedule.name.as_str()) {
                return Err(CliError::InvalidDefinition(format!(
                    "duplicate schedule name: {}",
                    schedule.name
                )));
            }
            schedule.policy.validate()?;
        }

        Ok(())
    }

    /// Evaluate every schedule against one shared generator
    pub fn evaluate(&self) -> Result<ScheduleTable> {
        let generator = ScheduleGenerator::<f64>::new(self.n_steps)?;
        debug!(n_steps = self.n_steps, "Generator constructed");

        let mut columns = Vec::with_capacity(self.schedules.len());
        for schedule in &self.schedules {
            let values = schedule.policy.generate(&generator)?;

            let non_finite = values.iter().filter(|v| !v.is_finite()).count();
            if non_finite > 0 {
                warn!(
                    schedule = %schedule.name,
                    policy = %schedule.policy,
                    non_finite,
                    "Schedule contains non-finite values"
                );
            }
            debug!(
                schedule = %schedule.name,
                policy = %schedule.policy,
                first = values.first().copied().unwrap_or(f64::NAN),
                last = values.last().copied().unwrap_or(f64::NAN),
                "Schedule evaluated"
            );

            columns.push(ScheduleColumn {
                name: schedule.name.clone(),
                policy: schedule.policy.name(),
                values,
            });
        }

        Ok(ScheduleTable {
            n_steps: self.n_steps,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_SCHEDULES: &str = r#"
n_steps = 6

[[schedules]]
name = "lr"
policy = "piecewise_constant_decay"
boundaries = [2, 4]
values = [1, 2, 3]

[[schedules]]
name = "momentum"
policy = "constant"
value = 0.9
"#;

    #[test]
    fn test_parse_definition() {
        let definition = ScheduleDefinition::from_toml_str(TWO_SCHEDULES).unwrap();
        assert_eq!(definition.n_steps, 6);
        assert_eq!(definition.schedules.len(), 2);
        assert_eq!(definition.schedules[0].name, "lr");
        assert_eq!(
            definition.schedules[1].policy,
            DecayPolicy::Constant { value: 0.9 }
        );
    }

    #[test]
    fn test_evaluate_definition() {
        let table = ScheduleDefinition::from_toml_str(TWO_SCHEDULES)
            .unwrap()
            .evaluate()
            .unwrap();
        assert_eq!(table.n_steps, 6);
        assert_eq!(table.columns[0].values, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        assert_eq!(table.columns[0].policy, "piecewise_constant_decay");
        assert!(table.columns[1].values.iter().all(|&v| v == 0.9));
    }

    #[test]
    fn test_optional_flags_default_to_false() {
        let toml = r#"
n_steps = 3

[[schedules]]
name = "lr"
policy = "polynomial_decay"
initial_value = 1.0
end_value = 0.0
power = 1.0
"#;
        let definition = ScheduleDefinition::from_toml_str(toml).unwrap();
        let table = definition.evaluate().unwrap();
        assert_relative_eq!(table.columns[0].values[1], 0.5);
    }

    #[test]
    fn test_arity_mismatch_is_rejected_early() {
        let toml = r#"
n_steps = 6

[[schedules]]
name = "lr"
policy = "piecewise_constant_decay"
boundaries = [2, 4]
values = [1, 2]
"#;
        let err = ScheduleDefinition::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CliError::Schedule(_)));
    }

    #[test]
    fn test_boundary_beyond_steps_fails_on_evaluate() {
        let toml = r#"
n_steps = 3

[[schedules]]
name = "lr"
policy = "piecewise_constant_decay"
boundaries = [5]
values = [1, 2]
"#;
        let definition = ScheduleDefinition::from_toml_str(toml).unwrap();
        assert!(matches!(
            definition.evaluate(),
            Err(CliError::Schedule(_))
        ));
    }

    #[test]
    fn test_zero_steps_fails_on_evaluate() {
        let definition = ScheduleDefinition::single(0, DecayPolicy::Constant { value: 1.0 });
        assert!(matches!(
            definition.evaluate(),
            Err(CliError::Schedule(_))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let toml = r#"
n_steps = 3

[[schedules]]
name = "lr"
policy = "constant"
value = 1.0

[[schedules]]
name = "lr"
policy = "constant"
value = 2.0
"#;
        let err = ScheduleDefinition::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate schedule name"));
    }

    #[test]
    fn test_empty_definition_rejected() {
        let err = ScheduleDefinition::from_toml_str("n_steps = 3").unwrap_err();
        assert!(matches!(err, CliError::InvalidDefinition(_)));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml = r#"
n_steps = 3

[[schedules]]
name = "lr"
policy = "warmup"
"#;
        assert!(ScheduleDefinition::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ScheduleDefinition::from_file(Path::new("/nonexistent/schedule.toml"))
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_bundled_example_definition() {
        let definition =
            ScheduleDefinition::from_toml_str(include_str!("../schedules/example.toml")).unwrap();
        let table = definition.evaluate().unwrap();

        assert_eq!(table.n_steps, 100);
        assert_eq!(table.columns.len(), 5);
        assert!(table.columns.iter().all(|c| c.values.len() == 100));

        let piecewise = &table.columns[1].values;
        assert_eq!(piecewise[29], 0.1);
        assert_eq!(piecewise[30], 0.01);
        assert_eq!(piecewise[99], 0.0001);
    }

    #[test]
    fn test_single_uses_policy_name() {
        let definition = ScheduleDefinition::single(4, DecayPolicy::Constant { value: 1.0 });
        assert_eq!(definition.schedules[0].name, "constant");
        assert!(definition.validate().is_ok());
    }
}
