#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` valid invoices of 1.00, 2.00, ... dollars.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["dollars", "cents"])?;

    for i in 1..=rows {
        wtr.write_record([i.to_string().as_str(), "0"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the given rows verbatim under a `dollars,cents` header.
pub fn write_rows(path: &Path, rows: &[[&str; 2]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["dollars", "cents"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
