//! Rendering evaluated schedules as JSON, CSV, or a text table

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// One evaluated schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleColumn {
    /// Column name
    pub name: String,
    /// Policy that produced the values
    pub policy: &'static str,
    /// One value per step
    pub values: Vec<f64>,
}

/// Evaluated schedules sharing one step count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleTable {
    /// Number of steps
    pub n_steps: usize,
    /// Schedules in output order
    #[serde(rename = "schedules")]
    pub columns: Vec<ScheduleColumn>,
}

impl ScheduleTable {
    /// Write the table to `out` in the requested format
    pub fn render<W: Write>(&self, format: OutputFormat, precision: usize, out: W) -> Result<()> {
        match format {
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_csv(precision, out),
            OutputFormat::Table => self.write_table(precision, out),
        }
    }

    fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, precision: usize, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);

        let header = std::iter::once("step").chain(self.columns.iter().map(|c| c.name.as_str()));
        writer.write_record(header)?;

        for step in 0..self.n_steps {
            let row = std::iter::once(step.to_string()).chain(
                self.columns
                    .iter()
                    .map(|c| format_value(c.values[step], precision)),
            );
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_table<W: Write>(&self, precision: usize, mut out: W) -> Result<()> {
        let mut headers = vec!["step".to_string()];
        headers.extend(self.columns.iter().map(|c| c.name.clone()));

        let rows: Vec<Vec<String>> = (0..self.n_steps)
            .map(|step| {
                std::iter::once(step.to_string())
                    .chain(
                        self.columns
                            .iter()
                            .map(|c| format_value(c.values[step], precision)),
                    )
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(out, "{}", border(&widths, '┌', '┬', '┐'))?;
        writeln!(out, "{}", line(&headers, &widths))?;
        writeln!(out, "{}", border(&widths, '├', '┼', '┤'))?;
        for row in &rows {
            writeln!(out, "{}", line(row, &widths))?;
        }
        writeln!(out, "{}", border(&widths, '└', '┴', '┘'))?;

        Ok(())
    }
}

fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!(" {:<width$} ", cell, width = w))
        .collect();
    format!("│{}│", padded.join("│"))
}
