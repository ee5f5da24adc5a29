use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T, E = InvoiceError> = std::result::Result<T, E>;

/// Reasons an invoice is refused by the ledger, or a statistic cannot be computed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("{field} must be a whole number, got {value:?}")]
    #[diagnostic(code(invoice::not_an_integer))]
    NotAnInteger { field: &'static str, value: String },

    #[error("invoice must be positive, got {dollars} dollars and {cents} cents")]
    #[diagnostic(code(invoice::non_positive_amount))]
    NonPositiveAmount { dollars: i64, cents: i64 },

    #[error("invoice amount {amount} must be less than {max}")]
    #[diagnostic(code(invoice::amount_too_large))]
    AmountTooLarge { amount: Decimal, max: Decimal },

    #[error("maximum capacity of {max_invoices} invoices reached, consider clearing storage")]
    #[diagnostic(code(ledger::capacity_exceeded))]
    CapacityExceeded { max_invoices: usize },

    #[error("no invoices stored")]
    #[diagnostic(code(ledger::empty))]
    EmptyLedger,

    #[error("sum of {invoices} invoices exceeds the representable decimal range")]
    #[diagnostic(code(ledger::sum_overflow))]
    SumOverflow { invoices: usize },
}

impl InvoiceError {
    /// Stable numeric code for the error kind.
    pub fn error_code(&self) -> u8 {
        match self {
            InvoiceError::NotAnInteger { .. } => 1,
            InvoiceError::NonPositiveAmount { .. } => 2,
            InvoiceError::AmountTooLarge { .. } => 3,
            InvoiceError::CapacityExceeded { .. } => 4,
            InvoiceError::EmptyLedger => 5,
            InvoiceError::SumOverflow { .. } => 6,
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum StatsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invoice(#[from] InvoiceError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
