//! Assertion functions for checking frames in tests.
//!
//! Each helper panics with the offending frame's columns and values so a
//! failing test shows what was actually produced.

use crate::frame::DataFrame;

/// Assert that `frame` has exactly `expected` columns, in order.
///
/// # Panics
///
/// Panics if the column names differ.
///
/// # Example
///
/// ```
/// use csvframe::DataFrame;
/// use csvframe::testing::assert_columns;
///
/// let df = DataFrame::new(["ID", "Cost"]).unwrap();
/// assert_columns(&df, &["ID", "Cost"]);
/// ```
pub fn assert_columns(frame: &DataFrame, expected: &[&str]) {
    assert_eq!(
        frame.columns(),
        expected,
        "Column mismatch:\n  Expected: {expected:?}\n  Actual: {:?}",
        frame.columns()
    );
}

/// Assert that column `field` holds exactly `expected`, in row order.
///
/// # Panics
///
/// Panics if `field` is not a column or the values differ.
///
/// # Example
///
/// ```
/// use csvframe::DataFrame;
/// use csvframe::testing::assert_column_values;
///
/// let df = DataFrame::new(["ID"]).unwrap().with_record(&["7"]).unwrap();
/// assert_column_values(&df, "ID", &["7"]);
/// ```
pub fn assert_column_values(frame: &DataFrame, field: &str, expected: &[&str]) {
    let actual: Vec<&str> = match frame.column_values(field) {
        Ok(values) => values.collect(),
        Err(e) => panic!("{e}; frame has columns {:?}", frame.columns()),
    };
    assert_eq!(
        actual.len(),
        expected.len(),
        "Row count mismatch in {field:?}:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Value mismatch in {field:?} at row {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two frames have the same columns and the same records in
/// the same order.
///
/// # Panics
///
/// Panics at the first difference.
pub fn assert_frames_equal(actual: &DataFrame, expected: &DataFrame) {
    assert_eq!(
        actual.columns(),
        expected.columns(),
        "Column mismatch between frames"
    );
    assert_eq!(
        actual.count_records(),
        expected.count_records(),
        "Record count mismatch:\n  Expected: {}\n  Actual: {}",
        expected.count_records(),
        actual.count_records()
    );
    for (i, (a, e)) in actual.records().iter().zip(expected.records()).enumerate() {
        assert_eq!(
            a.values(),
            e.values(),
            "Record mismatch at row {i}:\n  Expected: {:?}\n  Actual: {:?}",
            e.values(),
            a.values()
        );
    }
}
