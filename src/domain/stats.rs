//! Mean and median over invoice amounts, to the cent.
//!
//! Both statistics are exact: amounts are summed as integer cents and compared
//! as `Decimal`, never as binary floats. Half a cent always rounds down.

use super::invoice::Invoice;
use crate::error::{InvoiceError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const HALF_CENT: Decimal = dec!(0.005);

/// Largest multiple of 0.01 that is `<= value`.
pub fn truncate_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity)
}

/// Median amount with any trailing half cent truncated.
///
/// Amounts carry at most two decimals, so the even-count median can only add a
/// third digit of 0 or 5.
pub fn median(invoices: &[Invoice]) -> Result<Decimal> {
    if invoices.is_empty() {
        return Err(InvoiceError::EmptyLedger);
    }

    let mut amounts: Vec<Decimal> = invoices.iter().map(Invoice::amount).collect();
    let mid = amounts.len() / 2;
    let (lower, upper, _) = amounts.select_nth_unstable(mid);
    let upper = *upper;

    let raw = if invoices.len() % 2 == 1 {
        upper
    } else {
        // The largest element left of `mid` is the other central value
        let lower = lower.iter().copied().max().unwrap_or(upper);
        (lower + upper) / Decimal::TWO
    };

    Ok(with_cent_scale(truncate_to_cents(raw)))
}

/// Arithmetic mean rounded to the cent.
///
/// A residue of exactly half a cent or less rounds down, anything above rounds
/// up.
pub fn mean(invoices: &[Invoice]) -> Result<Decimal> {
    if invoices.is_empty() {
        return Err(InvoiceError::EmptyLedger);
    }

    let total_cents: i128 = invoices.iter().map(Invoice::amount_in_cents).sum();
    let raw = raw_mean(total_cents, invoices.len())?;
    let truncated = truncate_to_cents(raw);

    let rounded = if raw <= truncated + HALF_CENT {
        truncated
    } else {
        raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };
    Ok(with_cent_scale(rounded))
}

/// Exact cent total divided by the count, failing if the total does not fit a
/// `Decimal`.
fn raw_mean(total_cents: i128, count: usize) -> Result<Decimal> {
    let overflow = || InvoiceError::SumOverflow { invoices: count };
    let total = Decimal::try_from_i128_with_scale(total_cents, 2).map_err(|_| overflow())?;
    total.checked_div(Decimal::from(count)).ok_or_else(overflow)
}

/// Fixes the scale at two digits so results always print as `x.yy`.
fn with_cent_scale(mut value: Decimal) -> Decimal {
    value.rescale(2);
    value
}
