//! Warranty rules as pure functions.
//!
//! The service composes these in order: eligibility, price, duration, end date.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use warrantyerp_core::{DomainError, DomainResult};

use crate::policy::WarrantyPolicy;

/// Number of A/E/I/O/U letters in `text`, case-insensitive.
///
/// Every occurrence counts: `"CEIBAOU20190701"` has 5.
pub fn vowel_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U'))
        .count()
}

/// A code is eligible unless its vowel count equals the policy's ineligible
/// count (3 by default). Any other count, including 0, is eligible.
pub fn allows_warranty(code: &str, policy: &WarrantyPolicy) -> bool {
    vowel_count(code) != policy.ineligible_vowel_count
}

pub fn warranty_price(price: Decimal, policy: &WarrantyPolicy) -> Decimal {
    if policy.is_premium(price) {
        price * policy.premium_rate
    } else {
        price * policy.standard_rate
    }
}

/// Coverage length in days. Keyed on the same threshold as [`warranty_price`].
pub fn warranty_duration(price: Decimal, policy: &WarrantyPolicy) -> u32 {
    if policy.is_premium(price) {
        policy.premium_days
    } else {
        policy.standard_days
    }
}

/// Last day of coverage for a warranty requested on `request_date`.
///
/// Standard coverage ends exactly `duration_days` later. Premium coverage
/// (`duration_days == policy.premium_days`) walks day by day from the request
/// date while the walk is before the end date, pushing the end date out one day
/// for every Monday visited. Each push also extends the walk. If the result
/// lands on a Sunday it moves to the Monday after.
pub fn warranty_end_date(
    request_date: NaiveDate,
    duration_days: u32,
    policy: &WarrantyPolicy,
) -> DomainResult<NaiveDate> {
    let mut end = request_date
        .checked_add_days(Days::new(u64::from(duration_days)))
        .ok_or_else(out_of_range)?;

    if duration_days == policy.premium_days {
        let mut day = request_date;
        while end > day {
            if day.weekday() == Weekday::Mon {
                end = end.succ_opt().ok_or_else(out_of_range)?;
            }
            day = day.succ_opt().ok_or_else(out_of_range)?;
        }

        if end.weekday() == Weekday::Sun {
            end = end.succ_opt().ok_or_else(out_of_range)?;
        }
    }

    Ok(end)
}

fn out_of_range() -> DomainError {
    DomainError::invariant("coverage end date is out of the supported calendar range")
}
