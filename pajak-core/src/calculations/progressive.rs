//! Progressive (marginal-rate) income tax under Article 17.
//!
//! # Schedule
//!
//! | Tier | Taxable income (Rp)           | Rate |
//! |------|-------------------------------|------|
//! | 1    | 0 – 50,000,000                | 5%   |
//! | 2    | 50,000,000 – 250,000,000      | 15%  |
//! | 3    | 250,000,000 – 500,000,000     | 25%  |
//! | 4    | above 500,000,000             | 35%  |
//!
//! # Rounding
//!
//! Tier amounts are accumulated unrounded and the total is rounded once, to
//! whole rupiah. A monthly figure is derived from the *rounded* annual total
//! and rounded again; the two results are both exposed on [`ProgressiveTax`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pajak_core::calculations::progressive::ProgressiveSchedule;
//!
//! let tax = ProgressiveSchedule::pph17().calculate(dec!(66000000));
//!
//! // 50,000,000 × 5% + 16,000,000 × 15%
//! assert_eq!(tax.annual_tax, dec!(4900000));
//! assert_eq!(tax.monthly_tax(), dec!(408333));
//! ```

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{percent, round_rupiah};
use crate::models::{CalculationStep, TaxBracket};

static PPH17_SCHEDULE: LazyLock<ProgressiveSchedule> = LazyLock::new(|| ProgressiveSchedule {
    brackets: vec![
        TaxBracket::new(
            Decimal::ZERO,
            Some(Decimal::from(50_000_000)),
            Decimal::new(5, 2),
        ),
        TaxBracket::new(
            Decimal::from(50_000_000),
            Some(Decimal::from(250_000_000)),
            Decimal::new(15, 2),
        ),
        TaxBracket::new(
            Decimal::from(250_000_000),
            Some(Decimal::from(500_000_000)),
            Decimal::new(25, 2),
        ),
        TaxBracket::new(Decimal::from(500_000_000), None, Decimal::new(35, 2)),
    ],
});

/// Errors raised when a bracket list does not form a valid schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No brackets were provided.
    #[error("schedule has no brackets")]
    Empty,

    /// The first bracket must start at zero.
    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    /// A bracket does not start where the previous one ended.
    #[error("bracket {index} starts at {found}, expected {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {index} has upper bound {upper} not above lower bound {lower}")]
    EmptyBracket {
        index: usize,
        lower: Decimal,
        upper: Decimal,
    },

    /// Only the last bracket may be open-ended.
    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    /// The last bracket must be open-ended so every base is covered.
    #[error("top bracket must be unbounded, ends at {0}")]
    BoundedTop(Decimal),

    /// Rates must lie in (0, 1].
    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    /// Rates may not fall as income rises.
    #[error("bracket {index} rate {rate} is below the previous rate {previous}")]
    DecreasingRate {
        index: usize,
        previous: Decimal,
        rate: Decimal,
    },
}

/// Tax attributed to one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTax {
    pub bracket: TaxBracket,
    /// Portion of the base that fell into this tier.
    pub taxed_amount: Decimal,
    /// `taxed_amount × rate`, unrounded.
    pub tax: Decimal,
}

/// Result of running a base through a [`ProgressiveSchedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    pub taxable_base: Decimal,

    /// Tiers the base reached, lowest first. A zero base yields a single
    /// zero-valued first tier.
    pub tiers: Vec<TierTax>,

    /// Sum of tier taxes before rounding.
    pub unrounded_tax: Decimal,

    /// `unrounded_tax` rounded to whole rupiah. This is the only rounding
    /// applied to the annual figure.
    pub annual_tax: Decimal,
}

impl ProgressiveTax {
    /// Monthly share: the rounded annual tax divided by twelve, rounded again.
    ///
    /// This double rounding is intentional; it can differ by one rupiah from
    /// rounding `unrounded_tax / 12` directly.
    pub fn monthly_tax(&self) -> Decimal {
        round_rupiah(self.annual_tax / Decimal::from(12))
    }

    /// One trace step per tier reached.
    pub fn steps(&self) -> Vec<CalculationStep> {
        self.tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| CalculationStep {
                label: format!("Lapisan {} ({}%)", index + 1, percent(tier.bracket.rate)),
                value: tier.tax,
            })
            .collect()
    }
}

/// A validated, contiguous marginal-rate schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveSchedule {
    brackets: Vec<TaxBracket>,
}

impl ProgressiveSchedule {
    /// Builds a schedule from caller-supplied brackets.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the brackets are empty, do not start at
    /// zero, leave gaps or overlap, have rates outside (0, 1] or falling
    /// rates, or if the top bracket is bounded.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let schedule = Self { brackets };
        schedule.validate()?;
        Ok(schedule)
    }

    /// The statutory Article 17 schedule for individuals.
    pub fn pph17() -> &'static Self {
        &PPH17_SCHEDULE
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Validates the bracket invariants.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let first = self.brackets.first().ok_or(ScheduleError::Empty)?;
        if !first.lower_bound.is_zero() {
            return Err(ScheduleError::NonZeroStart(first.lower_bound));
        }

        let last_index = self.brackets.len() - 1;
        let mut previous: Option<&TaxBracket> = None;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate <= Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }

            if let Some(prev) = previous {
                // Every bracket before the last one is bounded, checked below.
                let expected = prev.upper_bound.unwrap_or(prev.lower_bound);
                if bracket.lower_bound != expected {
                    return Err(ScheduleError::NotContiguous {
                        index,
                        expected,
                        found: bracket.lower_bound,
                    });
                }
                if bracket.rate < prev.rate {
                    return Err(ScheduleError::DecreasingRate {
                        index,
                        previous: prev.rate,
                        rate: bracket.rate,
                    });
                }
            }

            match bracket.upper_bound {
                Some(upper) if index == last_index => {
                    return Err(ScheduleError::BoundedTop(upper));
                }
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyBracket {
                        index,
                        lower: bracket.lower_bound,
                        upper,
                    });
                }
                None if index != last_index => {
                    return Err(ScheduleError::UnboundedBeforeEnd(index));
                }
                _ => {}
            }

            previous = Some(bracket);
        }
        Ok(())
    }

    /// Applies the schedule to a non-negative taxable base.
    pub fn calculate(
        &self,
        taxable_base: Decimal,
    ) -> ProgressiveTax {
        debug_assert!(
            !taxable_base.is_sign_negative(),
            "taxable base must be non-negative, got {taxable_base}"
        );

        let mut remaining = taxable_base;
        let mut tiers = Vec::new();
        let mut unrounded_tax = Decimal::ZERO;

        for bracket in &self.brackets {
            let taxed_amount = match bracket.width() {
                Some(width) => remaining.min(width),
                None => remaining,
            };
            let tax = taxed_amount * bracket.rate;
            unrounded_tax += tax;
            tiers.push(TierTax {
                bracket: bracket.clone(),
                taxed_amount,
                tax,
            });

            remaining -= taxed_amount;
            if remaining <= Decimal::ZERO {
                break;
            }
        }

        ProgressiveTax {
            taxable_base,
            tiers,
            unrounded_tax,
            annual_tax: round_rupiah(unrounded_tax),
        }
    }
}

/// Article 17 tax on `taxable_base` using the statutory schedule.
pub fn pph17_tax(taxable_base: Decimal) -> ProgressiveTax {
    ProgressiveSchedule::pph17().calculate(taxable_base)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(
        lower: Decimal,
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> TaxBracket {
        TaxBracket::new(lower, upper, rate)
    }

    // =========================================================================
    // statutory schedule tests
    // =========================================================================

    #[test]
    fn statutory_schedule_is_valid() {
        assert_eq!(ProgressiveSchedule::pph17().validate(), Ok(()));
        assert_eq!(ProgressiveSchedule::pph17().brackets().len(), 4);
    }

    #[test]
    fn zero_base_yields_single_zero_tier() {
        let tax = pph17_tax(Decimal::ZERO);

        assert_eq!(tax.annual_tax, Decimal::ZERO);
        assert_eq!(tax.monthly_tax(), Decimal::ZERO);
        assert_eq!(tax.tiers.len(), 1);
        assert_eq!(tax.tiers[0].tax, Decimal::ZERO);
    }

    #[test]
    fn first_tier_boundary() {
        let tax = pph17_tax(dec!(50000000));

        assert_eq!(tax.annual_tax, dec!(2500000));
        assert_eq!(tax.tiers.len(), 1);
    }

    #[test]
    fn second_tier_boundary() {
        let tax = pph17_tax(dec!(250000000));

        // 2,500,000 + 200,000,000 × 15%
        assert_eq!(tax.annual_tax, dec!(32500000));
        assert_eq!(tax.tiers.len(), 2);
    }

    #[test]
    fn third_tier_boundary() {
        let tax = pph17_tax(dec!(500000000));

        // 32,500,000 + 250,000,000 × 25%
        assert_eq!(tax.annual_tax, dec!(95000000));
        assert_eq!(tax.tiers.len(), 3);
    }

    #[test]
    fn top_tier_is_unbounded() {
        let tax = pph17_tax(dec!(1000000000));

        // 95,000,000 + 500,000,000 × 35%
        assert_eq!(tax.annual_tax, dec!(270000000));
        assert_eq!(tax.tiers[3].taxed_amount, dec!(500000000));
    }

    #[test]
    fn just_above_boundary_enters_next_tier() {
        let tax = pph17_tax(dec!(50000001));

        assert_eq!(tax.tiers.len(), 2);
        assert_eq!(tax.tiers[1].taxed_amount, dec!(1));
        assert_eq!(tax.unrounded_tax, dec!(2500000.15));
        assert_eq!(tax.annual_tax, dec!(2500000));
    }

    #[test]
    fn fractional_total_rounds_half_away_from_zero() {
        let tax = pph17_tax(dec!(10));

        assert_eq!(tax.unrounded_tax, dec!(0.50));
        assert_eq!(tax.annual_tax, dec!(1));
    }

    #[test]
    fn monthly_tax_rounds_the_rounded_annual_tax() {
        // 123,456,790 taxable: 2,500,000 + 73,456,790 × 15% = 13,518,518.5
        let tax = pph17_tax(dec!(123456790));

        assert_eq!(tax.unrounded_tax, dec!(13518518.50));
        assert_eq!(tax.annual_tax, dec!(13518519));
        // 13,518,519 / 12 = 1,126,543.25
        assert_eq!(tax.monthly_tax(), dec!(1126543));
    }

    #[test]
    fn steps_label_each_tier() {
        let steps = pph17_tax(dec!(66000000)).steps();

        assert_eq!(
            steps,
            vec![
                CalculationStep {
                    label: "Lapisan 1 (5%)".to_string(),
                    value: dec!(2500000),
                },
                CalculationStep {
                    label: "Lapisan 2 (15%)".to_string(),
                    value: dec!(2400000),
                },
            ]
        );
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn new_accepts_valid_brackets() {
        let schedule = ProgressiveSchedule::new(vec![
            bracket(dec!(0), Some(dec!(100)), dec!(0.10)),
            bracket(dec!(100), None, dec!(0.20)),
        ])
        .unwrap();

        assert_eq!(schedule.calculate(dec!(150)).annual_tax, dec!(20));
    }

    #[test]
    fn new_rejects_empty_schedule() {
        assert_eq!(ProgressiveSchedule::new(vec![]), Err(ScheduleError::Empty));
    }

    #[test]
    fn new_rejects_non_zero_start() {
        let result = ProgressiveSchedule::new(vec![bracket(dec!(10), None, dec!(0.10))]);

        assert_eq!(result, Err(ScheduleError::NonZeroStart(dec!(10))));
    }

    #[test]
    fn new_rejects_gap() {
        let result = ProgressiveSchedule::new(vec![
            bracket(dec!(0), Some(dec!(100)), dec!(0.10)),
            bracket(dec!(120), None, dec!(0.20)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::NotContiguous {
                index: 1,
                expected: dec!(100),
                found: dec!(120),
            })
        );
    }

    #[test]
    fn new_rejects_overlap() {
        let result = ProgressiveSchedule::new(vec![
            bracket(dec!(0), Some(dec!(100)), dec!(0.10)),
            bracket(dec!(80), None, dec!(0.20)),
        ]);

        assert!(matches!(result, Err(ScheduleError::NotContiguous { index: 1, .. })));
    }

    #[test]
    fn new_rejects_decreasing_rate() {
        let result = ProgressiveSchedule::new(vec![
            bracket(dec!(0), Some(dec!(100)), dec!(0.20)),
            bracket(dec!(100), None, dec!(0.10)),
        ]);

        assert_eq!(
            result,
            Err(ScheduleError::DecreasingRate {
                index: 1,
                previous: dec!(0.20),
                rate: dec!(0.10),
            })
        );
    }

    #[test]
    fn new_rejects_rate_out_of_range() {
        let zero = ProgressiveSchedule::new(vec![bracket(dec!(0), None, dec!(0))]);
        let above_one = ProgressiveSchedule::new(vec![bracket(dec!(0), None, dec!(1.5))]);

        assert!(matches!(zero, Err(ScheduleError::InvalidRate { index: 0, .. })));
        assert!(matches!(above_one, Err(ScheduleError::InvalidRate { index: 0, .. })));
    }

    #[test]
    fn new_rejects_unbounded_middle_bracket() {
        let result = ProgressiveSchedule::new(vec![
            bracket(dec!(0), None, dec!(0.10)),
            bracket(dec!(0), None, dec!(0.20)),
        ]);

        assert_eq!(result, Err(ScheduleError::UnboundedBeforeEnd(0)));
    }

    #[test]
    fn new_rejects_bounded_top() {
        let result = ProgressiveSchedule::new(vec![bracket(dec!(0), Some(dec!(100)), dec!(0.10))]);

        assert_eq!(result, Err(ScheduleError::BoundedTop(dec!(100))));
    }

    #[test]
    fn new_rejects_empty_bracket() {
        let result = ProgressiveSchedule::new(vec![
            bracket(dec!(0), Some(dec!(0)), dec!(0.10)),
            bracket(dec!(0), None, dec!(0.20)),
        ]);

        assert!(matches!(result, Err(ScheduleError::EmptyBracket { index: 0, .. })));
    }
}
