use crate::error::{InvoiceError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound on a single invoice amount, in dollars.
pub const MAX_INVOICE_AMOUNT: Decimal = dec!(200000000);

/// A monetary line-item expressed as whole dollars and whole cents.
///
/// Construction accepts any pair of integers; validity is only enforced when the
/// invoice is submitted to a ledger (see [`Invoice::check_valid`]). No
/// normalization happens, so `cents` above 99 simply carries into the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub dollars: i64,
    pub cents: i64,
}

impl Invoice {
    pub fn new(dollars: i64, cents: i64) -> Self {
        Self { dollars, cents }
    }

    /// Builds an invoice from untyped text fields, e.g. a CSV row.
    ///
    /// Only checks that both fields are whole numbers.
    pub fn parse(dollars: &str, cents: &str) -> Result<Self> {
        Ok(Self {
            dollars: parse_whole("dollars", dollars)?,
            cents: parse_whole("cents", cents)?,
        })
    }

    /// Exact amount in cents. Computed in `i128` so it cannot overflow.
    pub fn amount_in_cents(&self) -> i128 {
        i128::from(self.dollars) * 100 + i128::from(self.cents)
    }

    /// `dollars + cents / 100` as a two-digit fixed-point decimal.
    pub fn amount(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.amount_in_cents(), 2)
    }

    /// Checks the invoice against [`MAX_INVOICE_AMOUNT`].
    pub fn check_valid(&self) -> Result<()> {
        self.check_valid_within(MAX_INVOICE_AMOUNT)
    }

    /// Checks the invoice against an explicit upper bound.
    ///
    /// Fails fast on the first violation: negative components or a non-positive
    /// total give `NonPositiveAmount`, then an amount at or above `max_amount`
    /// gives `AmountTooLarge`.
    pub fn check_valid_within(&self, max_amount: Decimal) -> Result<()> {
        if self.dollars < 0 || self.cents < 0 || self.amount_in_cents() <= 0 {
            return Err(InvoiceError::NonPositiveAmount {
                dollars: self.dollars,
                cents: self.cents,
            });
        }

        let amount = self.amount();
        if amount >= max_amount {
            return Err(InvoiceError::AmountTooLarge {
                amount,
                max: max_amount,
            });
        }

        Ok(())
    }
}

fn parse_whole(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InvoiceError::NotAnInteger {
            field,
            value: raw.to_string(),
        })
}
