use crate::domain::invoice::Invoice;
use crate::error::StatsError;
use serde::Deserialize;
use std::io::Read;

/// A CSV row before its fields are known to be whole numbers.
#[derive(Debug, Deserialize)]
struct InvoiceRecord {
    dollars: String,
    cents: String,
}

/// Reads invoices from a CSV source with a `dollars,cents` header.
///
/// Whitespace is trimmed and record lengths are flexible, so a short row
/// surfaces as an error on that row only.
pub struct InvoiceReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvoiceReader<R> {
    /// Creates a new `InvoiceReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads invoices, one `Result` per row.
    ///
    /// Rows whose fields are not whole numbers yield `NotAnInteger`; amount
    /// validation is left to the ledger.
    pub fn invoices(self) -> impl Iterator<Item = Result<Invoice, StatsError>> {
        self.reader.into_deserialize::<InvoiceRecord>().map(|result| {
            let record = result?;
            Ok(Invoice::parse(&record.dollars, &record.cents)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvoiceError;

    #[test]
    fn test_reader_valid_stream() {
        let data = "dollars, cents\n1, 23\n10000, 0\n";
        let reader = InvoiceReader::new(data.as_bytes());
        let results: Vec<Result<Invoice, StatsError>> = reader.invoices().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(*results[0].as_ref().unwrap(), Invoice::new(1, 23));
        assert_eq!(*results[1].as_ref().unwrap(), Invoice::new(10_000, 0));
    }

    #[test]
    fn test_reader_keeps_invalid_amounts_for_the_ledger() {
        let data = "dollars,cents\n-1,0\n0,0\n";
        let reader = InvoiceReader::new(data.as_bytes());
        let invoices: Vec<Invoice> = reader.invoices().map(|r| r.unwrap()).collect();

        assert_eq!(invoices, vec![Invoice::new(-1, 0), Invoice::new(0, 0)]);
    }

    #[test]
    fn test_reader_not_an_integer() {
        let data = "dollars,cents\n1.5,0\n2,x\n";
        let reader = InvoiceReader::new(data.as_bytes());
        let results: Vec<Result<Invoice, StatsError>> = reader.invoices().collect();

        assert!(matches!(
            results[0],
            Err(StatsError::Invoice(InvoiceError::NotAnInteger {
                field: "dollars",
                ..
            }))
        ));
        assert!(matches!(
            results[1],
            Err(StatsError::Invoice(InvoiceError::NotAnInteger {
                field: "cents",
                ..
            }))
        ));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "dollars,cents\n5\n3,50\n";
        let reader = InvoiceReader::new(data.as_bytes());
        let results: Vec<Result<Invoice, StatsError>> = reader.invoices().collect();

        assert!(matches!(results[0], Err(StatsError::CsvError(_))));
        assert_eq!(*results[1].as_ref().unwrap(), Invoice::new(3, 50));
    }
}
