//! Policy command implementation
//!
//! Evaluates a single decay policy given as `key=value` parameters, where
//! each value is a TOML literal (`0.1`, `true`, `[2, 4]`).

use std::path::Path;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::definition::ScheduleDefinition;
use crate::{CliError, Result};
use schedule_core::DecayPolicy;

/// Run the policy command
pub fn run(
    name: &str,
    n_steps: usize,
    params: &[String],
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<()> {
    info!("Evaluating {} over {} steps", name, n_steps);

    let policy = parse_policy(name, params)?;
    debug!(?policy, "Parsed policy parameters");

    let definition = ScheduleDefinition::single(n_steps, policy);
    definition.validate()?;

    let table = definition.evaluate()?;
    super::emit(&table, config, output)
}

/// Build a policy from its name and `key=value` parameters
pub fn parse_policy(name: &str, params: &[String]) -> Result<DecayPolicy<f64>> {
    if !DecayPolicy::<f64>::NAMES.iter().any(|&known| known == name) {
        return Err(CliError::InvalidArgument(format!(
            "Unknown policy: {}. Supported: {}",
            name,
            DecayPolicy::<f64>::NAMES.join(", ")
        )));
    }

    let mut table = toml::Table::new();
    table.insert("policy".to_string(), toml::Value::String(name.to_string()));

    for param in params {
        let (key, value) = param.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!("Expected key=value, got: {}", param))
        })?;
        let key = key.trim();
        if key.is_empty() || key == "policy" {
            return Err(CliError::InvalidArgument(format!(
                "Invalid parameter name in: {}",
                param
            )));
        }

        table.insert(key.to_string(), parse_literal(key, value)?);
    }

    toml::Value::Table(table)
        .try_into::<DecayPolicy<f64>>()
        .map_err(|e| CliError::InvalidArgument(format!("Invalid parameters for {}: {}", name, e)))
}

/// Parse one TOML literal such as `0.5`, `true` or `[1, 2]`
fn parse_literal(key: &str, literal: &str) -> Result<toml::Value> {
    let mut document: toml::Table = toml::from_str(&format!("value = {}", literal.trim()))
        .map_err(|e| CliError::InvalidArgument(format!("Invalid value for {}: {}", key, e)))?;

    document
        .remove("value")
        .ok_or_else(|| CliError::InvalidArgument(format!("Missing value for {}", key)))
}
