//! Column aggregations expressed as combiners.
//!
//! A combiner is an implementation of [`Aggregate`]: it creates an empty
//! accumulator, folds parsed `f64` cells into it and finishes into an output.
//! [`DataFrame::aggregate`] drives any combiner over one column; the
//! convenience methods below are thin wrappers around it:
//!
//! - [`Sum`] -- [`DataFrame::sum`]
//! - [`Mean`] -- [`DataFrame::average`] (`0.0` for an empty frame)
//! - [`Min`] / [`Max`] -- [`DataFrame::min`] / [`DataFrame::max`]
//! - [`StdDev`] -- [`DataFrame::standard_deviation`] (population)
//!
//! # Examples
//! ```
//! use csvframe::DataFrame;
//! use csvframe::combiners::{Max, Mean};
//!
//! # fn main() -> csvframe::FrameResult<()> {
//! let df = DataFrame::new(["Weight"])?
//!     .with_record(&["286"])?
//!     .with_record(&["324"])?;
//!
//! assert_eq!(df.aggregate("Weight", &Mean)?, 305.0);
//! assert_eq!(df.aggregate("Weight", &Max)?, 324.0);
//! # Ok(())
//! # }
//! ```

mod basic;
mod statistical;

pub use basic::{Max, Min, Sum};
pub use statistical::{Mean, StdDev, standard_deviation_of};

use crate::error::FrameResult;
use crate::frame::DataFrame;
use crate::row::FieldAccess;

/// A fold over the numeric values of one column.
///
/// `A` is the accumulator, `O` the output. `finish` may fail, e.g. when the
/// combiner has no meaningful result for zero inputs.
pub trait Aggregate<A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: f64);
    fn finish(&self, acc: A) -> FrameResult<O>;
}

impl DataFrame {
    /// Fold every value of `field`, parsed as `f64`, through `comb`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) for
    /// an unknown field,
    /// [`FrameError::ConversionError`](crate::FrameError::ConversionError) on
    /// the first non-numeric cell, or whatever `comb.finish` returns.
    pub fn aggregate<C, A, O>(&self, field: &str, comb: &C) -> FrameResult<O>
    where
        C: Aggregate<A, O>,
    {
        self.column_index().require(field)?;
        let mut acc = comb.create();
        for row in self.rows() {
            comb.add_input(&mut acc, row.convert_to_float(field)?);
        }
        comb.finish(acc)
    }

    /// Sum of a numeric column.
    ///
    /// # Errors
    /// See [`aggregate`](Self::aggregate).
    pub fn sum(&self, field: &str) -> FrameResult<f64> {
        self.aggregate(field, &Sum)
    }

    /// Arithmetic mean of a numeric column; `0.0` when there are no rows.
    ///
    /// # Errors
    /// See [`aggregate`](Self::aggregate).
    pub fn average(&self, field: &str) -> FrameResult<f64> {
        self.aggregate(field, &Mean)
    }

    /// Largest value of a numeric column.
    ///
    /// # Errors
    /// [`FrameError::EmptyFrame`](crate::FrameError::EmptyFrame) when there
    /// are no rows, otherwise see [`aggregate`](Self::aggregate).
    pub fn max(&self, field: &str) -> FrameResult<f64> {
        self.aggregate(field, &Max)
    }

    /// Smallest value of a numeric column.
    ///
    /// # Errors
    /// [`FrameError::EmptyFrame`](crate::FrameError::EmptyFrame) when there
    /// are no rows, otherwise see [`aggregate`](Self::aggregate).
    pub fn min(&self, field: &str) -> FrameResult<f64> {
        self.aggregate(field, &Min)
    }

    /// Population standard deviation of a numeric column.
    ///
    /// # Errors
    /// [`FrameError::EmptyFrame`](crate::FrameError::EmptyFrame) when there
    /// are no rows, otherwise see [`aggregate`](Self::aggregate).
    pub fn standard_deviation(&self, field: &str) -> FrameResult<f64> {
        self.aggregate(field, &StdDev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;

    fn values() -> DataFrame {
        let mut df = DataFrame::new(["ID", "Value"]).unwrap();
        for i in 0..1000 {
            df.add_record(&[format!("ID-{i}"), i.to_string()]).unwrap();
        }
        df
    }

    #[test]
    fn basic_aggregates() {
        let df = values();
        assert_eq!(df.sum("Value").unwrap(), 499_500.0);
        assert_eq!(df.average("Value").unwrap(), 499.5);
        assert_eq!(df.max("Value").unwrap(), 999.0);
        assert_eq!(df.min("Value").unwrap(), 0.0);
    }

    #[test]
    fn standard_deviation_of_column() {
        let sd = values().standard_deviation("Value").unwrap();
        assert!((sd - 288.674_990_257_209_5).abs() < 1e-9, "got {sd}");
    }

    #[test]
    fn conversion_failure_surfaces() {
        let mut df = values();
        df.add_record(&["ID-500", "5x0x0x"]).unwrap();
        for result in [
            df.sum("Value"),
            df.max("Value"),
            df.standard_deviation("Value"),
        ] {
            assert!(matches!(result, Err(FrameError::ConversionError { .. })));
        }
    }

    #[test]
    fn empty_frame_behaviour() {
        let df = DataFrame::new(["Value"]).unwrap();
        assert_eq!(df.sum("Value").unwrap(), 0.0);
        assert_eq!(df.average("Value").unwrap(), 0.0);
        assert!(matches!(df.max("Value"), Err(FrameError::EmptyFrame)));
        assert!(matches!(df.min("Value"), Err(FrameError::EmptyFrame)));
        assert!(matches!(
            df.standard_deviation("Value"),
            Err(FrameError::EmptyFrame)
        ));
        assert!(matches!(df.sum("Nope"), Err(FrameError::ColumnNotFound(_))));
    }

    struct CountAbove(f64);

    impl Aggregate<usize, usize> for CountAbove {
        fn create(&self) -> usize {
            0
        }
        fn add_input(&self, acc: &mut usize, v: f64) {
            if v > self.0 {
                *acc += 1;
            }
        }
        fn finish(&self, acc: usize) -> FrameResult<usize> {
            Ok(acc)
        }
    }

    #[test]
    fn custom_combiner() {
        assert_eq!(values().aggregate("Value", &CountAbove(989.0)).unwrap(), 10);
    }
}
