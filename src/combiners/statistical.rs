//! Statistical combiners: `Mean`, `StdDev`

use super::Aggregate;
use crate::error::{FrameError, FrameResult};

/* ===================== Mean ===================== */

/// Arithmetic mean.
///
/// - Accumulator: `(sum, count)`
/// - Output: `f64`
///
/// Zero inputs produce `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mean;

impl Aggregate<(f64, u64), f64> for Mean {
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: f64) {
        acc.0 += v;
        acc.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> FrameResult<f64> {
        if acc.1 == 0 {
            Ok(0.0)
        } else {
            Ok(acc.0 / (acc.1 as f64))
        }
    }
}

/* ===================== StdDev ===================== */

/// Population standard deviation.
///
/// Buffers every input and computes the mean first, then the squared
/// deviations from it.
///
/// - Accumulator: `Vec<f64>`
/// - Output: `f64`, or [`FrameError::EmptyFrame`] for no inputs
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDev;

impl Aggregate<Vec<f64>, f64> for StdDev {
    fn create(&self) -> Vec<f64> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<f64>, v: f64) {
        acc.push(v);
    }

    fn finish(&self, acc: Vec<f64>) -> FrameResult<f64> {
        if acc.is_empty() {
            return Err(FrameError::EmptyFrame);
        }
        Ok(standard_deviation_of(&acc))
    }
}

/// Population standard deviation of a slice: `sqrt(mean((x - mean)^2))`.
///
/// Returns `NaN` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn standard_deviation_of(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squares / n).sqrt()
}
