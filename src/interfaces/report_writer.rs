use crate::application::engine::StatsReport;
use crate::error::StatsError;
use clap::ValueEnum;
use std::io::Write;

/// Output encoding for a [`StatsReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

/// Writes a `StatsReport` to any `Write` sink.
pub struct ReportWriter<W: Write> {
    sink: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, format: ReportFormat) -> Self {
        Self { sink, format }
    }

    /// CSV output is a header plus one row; missing statistics are empty cells.
    pub fn write_report(&mut self, report: &StatsReport) -> Result<(), StatsError> {
        match self.format {
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                writer.serialize(report)?;
                writer.flush()?;
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.sink, report)?;
                writeln!(self.sink)?;
            }
        }
        Ok(())
    }
}
