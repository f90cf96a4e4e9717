//! Totals over filtered entries

use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// Positive and negative totals kept apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SplitTotals {
    /// Sum of amounts above zero (bonuses)
    pub positive_total: Decimal,
    /// Magnitude of the sum of amounts below zero (deductions)
    pub negative_total_absolute: Decimal,
}

/// Summary of one group of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregationResult {
    pub count: usize,
    pub total: Decimal,
    /// Present only for signed, payroll-style entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitTotals>,
}

impl AggregationResult {
    /// Count and total
    pub fn totals<'a, T, I, F>(entries: I, amount_of: F) -> Result<Self>
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> Decimal,
    {
        let mut count = 0;
        let mut total = Decimal::ZERO;
        for entry in entries {
            count += 1;
            total = checked_add(total, amount_of(entry))?;
        }
        Ok(AggregationResult {
            count,
            total,
            split: None,
        })
    }

    /// Count, total and the bonus/deduction split
    pub fn with_split<'a, T, I, F>(entries: I, amount_of: F) -> Result<Self>
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> Decimal,
    {
        let amounts: Vec<Decimal> = entries.into_iter().map(|e| amount_of(e)).collect();
        Ok(AggregationResult {
            count: amounts.len(),
            total: sum(amounts.iter(), |a: &Decimal| *a)?,
            split: Some(split_sum(amounts.iter(), |a: &Decimal| *a)?),
        })
    }

    pub fn bonus_total(&self) -> Decimal {
        self.split.map(|s| s.positive_total).unwrap_or_default()
    }

    pub fn deduction_total(&self) -> Decimal {
        self.split
            .map(|s| s.negative_total_absolute)
            .unwrap_or_default()
    }
}

/// `a + b`, failing instead of overflowing
pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| LedgerError::AmountOverflow(format!("{} + {}", a, b)))
}

/// `a - b`, failing instead of overflowing
pub fn checked_sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b)
        .ok_or_else(|| LedgerError::AmountOverflow(format!("{} - {}", a, b)))
}

/// Sum of `amount_of` over all entries, zero when there are none
///
/// # Errors
///
/// Returns `AmountOverflow` when the total leaves the representable range.
pub fn sum<'a, T, I, F>(entries: I, amount_of: F) -> Result<Decimal>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Decimal,
{
    entries
        .into_iter()
        .try_fold(Decimal::ZERO, |total, e| checked_add(total, amount_of(e)))
}

/// Sum positive and negative amounts separately
///
/// Zero amounts land in neither bucket. The negative bucket is reported as a
/// non-negative magnitude.
pub fn split_sum<'a, T, I, F>(entries: I, amount_of: F) -> Result<SplitTotals>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Decimal,
{
    let mut totals = SplitTotals::default();
    for entry in entries {
        let amount = amount_of(entry);
        if amount > Decimal::ZERO {
            totals.positive_total = checked_add(totals.positive_total, amount)?;
        } else if amount < Decimal::ZERO {
            totals.negative_total_absolute = checked_sub(totals.negative_total_absolute, amount)?;
        }
    }
    Ok(totals)
}
