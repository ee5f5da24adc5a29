use clap::Parser;
use invoice_stats::application::engine::StatsEngine;
use invoice_stats::domain::invoice::MAX_INVOICE_AMOUNT;
use invoice_stats::domain::ledger::{LedgerConfig, MAX_INVOICES};
use invoice_stats::interfaces::csv::invoice_reader::InvoiceReader;
use invoice_stats::interfaces::report_writer::{ReportFormat, ReportWriter};
use invoice_stats::telemetry;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input invoices CSV file with a `dollars,cents` header
    input: PathBuf,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Maximum number of invoices kept in the ledger
    #[arg(long, default_value_t = MAX_INVOICES)]
    max_invoices: usize,

    /// Exclusive upper bound on a single invoice amount
    #[arg(long, default_value_t = MAX_INVOICE_AMOUNT)]
    max_invoice_amount: Decimal,
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let mut engine = StatsEngine::new(LedgerConfig {
        max_invoices: cli.max_invoices,
        max_invoice_amount: cli.max_invoice_amount,
    });

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = InvoiceReader::new(file);
    for (index, row) in reader.invoices().enumerate() {
        let _row = tracing::info_span!("row", number = index + 1).entered();
        engine.submit(row);
    }

    let report = engine.into_report()?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format);
    writer.write_report(&report)?;

    Ok(())
}
