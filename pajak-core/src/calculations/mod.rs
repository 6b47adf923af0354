//! Indonesian tax computations.
//!
//! Leaf tables ([`allowance`], [`norm`], [`rates`]) feed two engines
//! ([`progressive`], [`flat_rate`]); [`calculators`] wires them together per
//! tax type.

pub mod allowance;
pub mod calculators;
pub mod common;
pub mod flat_rate;
pub mod norm;
pub mod progressive;
pub mod rates;

pub use calculators::{RequestError, TaxRequest};
pub use flat_rate::{FlatRateTax, FlatRated};
pub use progressive::{ProgressiveSchedule, ProgressiveTax, ScheduleError};
