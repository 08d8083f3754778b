//! # Fine Discount Calculator
//!
//! Prices a traffic fine under the early-payment rule: a fixed percentage
//! off during a short window after issuance ("pay early, pay less").
//! Window length and percentage are policy, not constants baked into the
//! arithmetic.
//!
//! ## Window Invariant
//!
//! The discount is active iff `0 <= days_since_issuance < window_days`,
//! counted in floored civil days. An as-of instant before issuance
//! (negative days) leaves the discount inactive.

use serde::{Deserialize, Serialize};

use civis_core::temporal::lenient;
use civis_core::{round2, CivilDateTime, FineId, ViolationCode};

/// Tunable constants of the early-payment rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarlyPaymentPolicy {
    /// Length of the discount window in civil days after issuance.
    pub window_days: i64,
    /// Percentage taken off the base amount while the window is open.
    pub discount_percent: f64,
}

impl Default for EarlyPaymentPolicy {
    /// 20% off during the first 14 days after issuance.
    fn default() -> Self {
        Self {
            window_days: 14,
            discount_percent: 20.0,
        }
    }
}

/// An issued traffic fine as the portal hands it to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    /// Record identifier.
    pub id: FineId,
    /// Violation code; `None` when the record carries an unknown code.
    #[serde(default)]
    pub kind: Option<ViolationCode>,
    /// Base amount of the fine.
    pub amount: f64,
    /// Issuance instant; lenient — a malformed value becomes `None`.
    #[serde(default, with = "lenient")]
    pub issued_at: Option<CivilDateTime>,
}

/// The priced view of a fine at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinePricing {
    /// The fine's base amount, non-negative.
    pub base_amount: f64,
    /// Percentage applied; zero when the window is closed.
    pub discount_percent: f64,
    /// Absolute discount, rounded to cents.
    pub discount_amount: f64,
    /// Payable amount, non-negative, rounded to cents.
    pub final_amount: f64,
    /// Whether the early-payment window is open at the as-of instant.
    pub is_discount_active: bool,
    /// Whole days remaining in the window; zero when closed.
    pub days_left: i64,
}

/// Price a fine at the given instant under the given policy.
///
/// Total function: a missing issuance stamp or a malformed amount
/// degrades to an undiscounted, non-negative price.
pub fn fine_pricing(
    fine: &Fine,
    as_of: &CivilDateTime,
    policy: &EarlyPaymentPolicy,
) -> FinePricing {
    let base_amount = if fine.amount.is_finite() {
        fine.amount.max(0.0)
    } else {
        0.0
    };

    let Some(issued_at) = fine.issued_at else {
        return FinePricing {
            base_amount,
            discount_percent: 0.0,
            discount_amount: 0.0,
            final_amount: base_amount,
            is_discount_active: false,
            days_left: 0,
        };
    };

    let days_passed = issued_at.days_until(as_of);
    let is_discount_active = days_passed >= 0 && days_passed < policy.window_days;

    let discount_percent = if is_discount_active {
        policy.discount_percent
    } else {
        0.0
    };
    // The subtraction uses the raw discount; rounding happens only at the
    // output boundary.
    let raw_discount = base_amount * discount_percent / 100.0;
    let days_left = if is_discount_active {
        (policy.window_days - days_passed).max(0)
    } else {
        0
    };

    FinePricing {
        base_amount,
        discount_percent,
        discount_amount: round2(raw_discount),
        final_amount: round2((base_amount - raw_discount).max(0.0)),
        is_discount_active,
        days_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of(s: &str) -> CivilDateTime {
        CivilDateTime::parse(s).unwrap()
    }

    fn fine(amount: f64, issued_at: Option<&str>) -> Fine {
        Fine {
            id: FineId::new(),
            kind: Some(ViolationCode::Speed11To20),
            amount,
            issued_at: issued_at.and_then(CivilDateTime::parse),
        }
    }

    #[test]
    fn test_discount_active_five_days_after_issuance() {
        let pricing = fine_pricing(
            &fine(150.0, Some("2025-03-01")),
            &as_of("2025-03-06"),
            &EarlyPaymentPolicy::default(),
        );
        assert!(pricing.is_discount_active);
        assert_eq!(pricing.discount_percent, 20.0);
        assert_eq!(pricing.discount_amount, 30.0);
        assert_eq!(pricing.final_amount, 120.0);
        assert_eq!(pricing.days_left, 9);
    }

    #[test]
    fn test_window_boundary_day_thirteen_and_fourteen() {
        let policy = EarlyPaymentPolicy::default();
        // Day 13: last day of the window.
        let pricing = fine_pricing(&fine(100.0, Some("2025-03-01")), &as_of("2025-03-14"), &policy);
        assert!(pricing.is_discount_active);
        assert_eq!(pricing.days_left, 1);
        // Day 14: window closed.
        let pricing = fine_pricing(&fine(100.0, Some("2025-03-01")), &as_of("2025-03-15"), &policy);
        assert!(!pricing.is_discount_active);
        assert_eq!(pricing.discount_amount, 0.0);
        assert_eq!(pricing.final_amount, 100.0);
        assert_eq!(pricing.days_left, 0);
    }

    #[test]
    fn test_partial_day_still_counts_as_previous_day() {
        // 13.9 elapsed days floors to 13: the window is still open.
        let pricing = fine_pricing(
            &fine(100.0, Some("2025-03-01T10:00:00")),
            &as_of("2025-03-15T07:00:00"),
            &EarlyPaymentPolicy::default(),
        );
        assert!(pricing.is_discount_active);
        assert_eq!(pricing.days_left, 1);
    }

    #[test]
    fn test_as_of_before_issuance_is_inactive() {
        let pricing = fine_pricing(
            &fine(100.0, Some("2025-03-10")),
            &as_of("2025-03-05"),
            &EarlyPaymentPolicy::default(),
        );
        assert!(!pricing.is_discount_active);
        assert_eq!(pricing.final_amount, 100.0);
        assert_eq!(pricing.days_left, 0);
    }

    #[test]
    fn test_missing_issuance_stamp_degrades() {
        let pricing = fine_pricing(
            &fine(150.0, None),
            &as_of("2025-03-06"),
            &EarlyPaymentPolicy::default(),
        );
        assert!(!pricing.is_discount_active);
        assert_eq!(pricing.base_amount, 150.0);
        assert_eq!(pricing.final_amount, 150.0);
    }

    #[test]
    fn test_malformed_amount_degrades_to_zero() {
        let pricing = fine_pricing(
            &fine(f64::NAN, Some("2025-03-01")),
            &as_of("2025-03-06"),
            &EarlyPaymentPolicy::default(),
        );
        assert_eq!(pricing.base_amount, 0.0);
        assert_eq!(pricing.final_amount, 0.0);
        let pricing = fine_pricing(
            &fine(-50.0, Some("2025-03-01")),
            &as_of("2025-03-06"),
            &EarlyPaymentPolicy::default(),
        );
        assert_eq!(pricing.base_amount, 0.0);
        assert_eq!(pricing.final_amount, 0.0);
    }

    #[test]
    fn test_custom_policy_window_and_rate() {
        let policy = EarlyPaymentPolicy {
            window_days: 7,
            discount_percent: 50.0,
        };
        let pricing = fine_pricing(&fine(80.0, Some("2025-03-01")), &as_of("2025-03-05"), &policy);
        assert!(pricing.is_discount_active);
        assert_eq!(pricing.discount_amount, 40.0);
        assert_eq!(pricing.final_amount, 40.0);
        assert_eq!(pricing.days_left, 3);
        let pricing = fine_pricing(&fine(80.0, Some("2025-03-01")), &as_of("2025-03-08"), &policy);
        assert!(!pricing.is_discount_active);
    }

    #[test]
    fn test_fine_deserializes_with_garbage_issued_at() {
        let json = format!(
            r#"{{"id": "{}", "amount": 150.0, "issued_at": "yesterday-ish"}}"#,
            FineId::new().as_uuid()
        );
        let fine: Fine = serde_json::from_str(&json).unwrap();
        assert!(fine.issued_at.is_none());
        assert!(fine.kind.is_none());
    }
}
