//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod generate;
pub mod policies;
pub mod policy;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::render::ScheduleTable;
use crate::Result;

/// Render `table` to `output`, or to stdout when no path is given
pub(crate) fn emit(table: &ScheduleTable, config: &CliConfig, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            table.render(config.format, config.precision, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} schedule(s) to {}", table.columns.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            table.render(config.format, config.precision, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}
