//! # Late-Payment Interest Calculator
//!
//! Accrues simple daily interest on an unpaid tax principal once a grace
//! period has elapsed. The grace period is one calendar month after the
//! due date — month-length aware, not a fixed 30-day offset.
//!
//! Interest is a flat daily rate on the principal (simple interest, no
//! compounding), counted in whole floored civil days past the grace
//! cutoff.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use civis_core::{round2, temporal, CivilDateTime};

/// Tunable constants of the late-interest rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateInterestPolicy {
    /// Calendar months of grace after the due date before interest runs.
    pub grace_months: i32,
    /// Interest per overdue day as a fraction of the principal.
    pub daily_rate: f64,
}

impl Default for LateInterestPolicy {
    /// One calendar month of grace, then 0.1% of the principal per day.
    fn default() -> Self {
        Self {
            grace_months: 1,
            daily_rate: 0.001,
        }
    }
}

/// A late-interest quote. Produced fresh on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    /// Whole days past the grace cutoff; zero within the grace period.
    pub overdue_days: i64,
    /// Accrued interest, non-negative, rounded to cents.
    pub interest: f64,
    /// Principal plus interest, rounded to cents.
    pub total: f64,
    /// End of the grace period; `None` when the due date was malformed.
    pub grace_until: Option<NaiveDate>,
}

/// Compute late-payment interest on `principal` due on `due_date`,
/// assessed at `as_of`.
///
/// Total function: a malformed (`None`) due date or a non-finite
/// principal yields a zero-interest quote rather than an error.
pub fn late_interest(
    principal: f64,
    due_date: Option<NaiveDate>,
    as_of: &CivilDateTime,
    policy: &LateInterestPolicy,
) -> InterestQuote {
    let principal = if principal.is_finite() { principal } else { 0.0 };

    let grace_until =
        due_date.and_then(|due| temporal::add_months_to_date(due, policy.grace_months));
    let Some(grace_date) = grace_until else {
        return InterestQuote {
            overdue_days: 0,
            interest: 0.0,
            total: round2(principal).max(0.0),
            grace_until: None,
        };
    };

    let grace_cutoff = CivilDateTime::from_date(grace_date);
    let overdue_days = if as_of.is_on_or_before(&grace_cutoff) {
        0
    } else {
        grace_cutoff.days_until(as_of).max(0)
    };

    let interest = round2(principal * policy.daily_rate * overdue_days as f64).max(0.0);
    let total = round2(principal + interest).max(0.0);

    InterestQuote {
        overdue_days,
        interest,
        total,
        grace_until: Some(grace_date),
    }
}
