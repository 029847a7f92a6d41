//! Basic arithmetic combiners: Sum, Min, Max

use super::Aggregate;
use crate::error::{FrameError, FrameResult};

/* ===================== Sum ===================== */

/// Sum of values.
///
/// - Accumulator: `f64`
/// - Output: `f64` (`0.0` for no inputs)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl Aggregate<f64, f64> for Sum {
    fn create(&self) -> f64 {
        0.0
    }

    fn add_input(&self, acc: &mut f64, v: f64) {
        *acc += v;
    }

    fn finish(&self, acc: f64) -> FrameResult<f64> {
        Ok(acc)
    }
}

/* ===================== Min ===================== */

/// Minimum value.
///
/// - Accumulator: `Option<f64>`
/// - Output: `f64`, or [`FrameError::EmptyFrame`] for no inputs
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl Aggregate<Option<f64>, f64> for Min {
    fn create(&self) -> Option<f64> {
        None
    }

    fn add_input(&self, acc: &mut Option<f64>, v: f64) {
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<f64>) -> FrameResult<f64> {
        acc.ok_or(FrameError::EmptyFrame)
    }
}

/* ===================== Max ===================== */

/// Maximum value.
///
/// - Accumulator: `Option<f64>`
/// - Output: `f64`, or [`FrameError::EmptyFrame`] for no inputs
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl Aggregate<Option<f64>, f64> for Max {
    fn create(&self) -> Option<f64> {
        None
    }

    fn add_input(&self, acc: &mut Option<f64>, v: f64) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<f64>) -> FrameResult<f64> {
        acc.ok_or(FrameError::EmptyFrame)
    }
}
