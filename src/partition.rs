//! Splitting a frame into contiguous sub-frames for parallel processing.

use crate::error::{FrameError, FrameResult};
use crate::frame::DataFrame;

impl DataFrame {
    /// Split into `n` contiguous sub-frames.
    ///
    /// Each sub-frame holds `count / n` rows except the last, which also
    /// takes the remainder. Sub-frames are copies and keep every column.
    ///
    /// # Errors
    /// - [`FrameError::EmptyFrame`] if the frame has no rows.
    /// - [`FrameError::InvalidArgument`] if `n` is zero or larger than the
    ///   row count.
    ///
    /// # Example
    /// ```
    /// use csvframe::DataFrame;
    ///
    /// # fn main() -> csvframe::FrameResult<()> {
    /// let mut df = DataFrame::new(["ID"])?;
    /// for i in 0..10 {
    ///     df.add_record(&[i.to_string()])?;
    /// }
    /// let parts = df.divide_and_conquer(3)?;
    /// let sizes: Vec<_> = parts.iter().map(DataFrame::count_records).collect();
    /// assert_eq!(sizes, [3, 3, 4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn divide_and_conquer(&self, n: usize) -> FrameResult<Vec<DataFrame>> {
        let count = self.count_records();
        if count == 0 {
            return Err(FrameError::EmptyFrame);
        }
        if n == 0 {
            return Err(FrameError::InvalidArgument(
                "sub-frame count cannot be zero".to_string(),
            ));
        }
        if n > count {
            return Err(FrameError::InvalidArgument(format!(
                "cannot split {count} rows into {n} sub-frames"
            )));
        }

        let per = count / n;
        let records = self.records();
        let mut parts = Vec::with_capacity(n);
        for i in 0..n {
            let start = i * per;
            let end = if i + 1 == n { count } else { start + per };
            let mut part = self.empty_like();
            part.records_mut().extend_from_slice(&records[start..end]);
            parts.push(part);
        }
        Ok(parts)
    }
}
