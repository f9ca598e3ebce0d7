//! Generate command implementation
//!
//! Evaluates every schedule in a definition file against one generator.

use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::definition::ScheduleDefinition;
use crate::Result;

/// Run the generate command
pub fn run(file: &Path, output: Option<&Path>, config: &CliConfig) -> Result<()> {
    info!("Starting schedule generation...");
    info!("  Definition: {}", file.display());
    info!("  Output format: {}", config.format);

    let definition = ScheduleDefinition::from_file(file)?;
    info!(
        "  Steps: {}, schedules: {}",
        definition.n_steps,
        definition.schedules.len()
    );

    let table = definition.evaluate()?;
    super::emit(&table, config, output)?;

    info!("Generation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::CliError;
    use std::io::Write;

    #[test]
    fn test_generate_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let definition = dir.path().join("schedule.toml");
        let output = dir.path().join("schedule.csv");

        let mut file = std::fs::File::create(&definition).unwrap();
        writeln!(
            file,
            "n_steps = 5\n\n[[schedules]]\nname = \"lr\"\npolicy = \"step_decay\"\ninitial_value = 1.0\ndrop = 0.5\ni_drop = 2"
        )
        .unwrap();

        let config = CliConfig {
            format: OutputFormat::Csv,
            precision: 2,
            ..Default::default()
        };
        run(&definition, Some(&output), &config).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec!["step,lr", "0,1.00", "1,1.00", "2,0.50", "3,0.50", "4,0.25"]
        );
    }

    #[test]
    fn test_generate_missing_definition() {
        let result = run(
            Path::new("/nonexistent/schedule.toml"),
            None,
            &CliConfig::default(),
        );
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
