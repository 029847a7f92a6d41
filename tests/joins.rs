// tests/joins.rs
use anyhow::Result;
use csvframe::testing::*;
use csvframe::*;

const NO_COLUMNS: &[&str] = &[];

#[test]
fn merge_all_location_columns() -> Result<()> {
    let mut df = SALES.frame()?;
    let locations = LOCATIONS.frame()?;
    df.merge(&locations, "ID", NO_COLUMNS)?;

    assert_columns(
        &df,
        &[
            "ID",
            "Date",
            "Cost",
            "Weight",
            "First Name",
            "Last Name",
            "City",
            "State",
            "Postal Code",
        ],
    );
    assert_eq!(df.count_records(), 10);
    assert_eq!(df.sum("Postal Code")?, 580_011.0);
    assert_eq!(df.row(9).unwrap().val("City")?, "JEFFERSON CITY");
    Ok(())
}

#[test]
fn merge_selected_columns() -> Result<()> {
    let mut df = SALES.frame()?;
    df.merge(&LOCATIONS.frame()?, "ID", &["Postal Code", "City"])?;
    assert_eq!(df.columns()[6..], ["Postal Code", "City"]);
    assert_eq!(df.row(0).unwrap().val("City")?, "AUSTIN");
    Ok(())
}

#[test]
fn merge_leaves_unmatched_rows_blank_and_last_key_wins() -> Result<()> {
    let mut df = SALES.frame()?;
    df.merge(&LOCATIONS_PARTIAL.frame()?, "ID", &["City"])?;

    assert_eq!(df.count_records(), 10);
    assert_column_values(
        &df,
        "City",
        &[
            "",
            "",
            "",
            "VAN BUREN",
            "TAUNTON",
            "",
            "GOLDSBORO",
            "",
            "TEMPE",
            "JEFFERSON CITY",
        ],
    );
    Ok(())
}

#[test]
fn merge_failure_leaves_frame_untouched() -> Result<()> {
    let mut df = SALES.frame()?;
    let before = df.copy();
    let err = df
        .merge(&LOCATIONS.frame()?, "ID", &["City", "County"])
        .unwrap_err();
    assert!(matches!(err, FrameError::ColumnNotFound(c) if c == "County"));
    assert_frames_equal(&df, &before);
    Ok(())
}

#[test]
fn inner_merge_keeps_matches_only() -> Result<()> {
    let df = SALES.frame()?;
    let joined = df.inner_merge(&LOCATIONS_PARTIAL.frame()?, "ID")?;

    assert_eq!(joined.count_records(), 5);
    assert_eq!(joined.column_count(), 9);
    assert_column_values(&joined, "ID", &["4", "5", "7", "9", "10"]);
    assert_column_values(
        &joined,
        "City",
        &["VAN BUREN", "TAUNTON", "GOLDSBORO", "PHOENIX", "JEFFERSON CITY"],
    );
    assert_eq!(df.column_count(), 6);
    Ok(())
}

#[test]
fn inner_merge_keeps_left_duplicates() -> Result<()> {
    let df = SALES_DUPLICATE_KEY.frame()?;
    let joined = df.inner_merge(&LOCATIONS_PARTIAL.frame()?, "ID")?;

    assert_eq!(joined.count_records(), 6);
    let nines = joined.filtered("ID", &["9"])?;
    assert_column_values(&nines, "Cost", &["939", "12345"]);
    assert_column_values(&nines, "City", &["PHOENIX", "PHOENIX"]);
    Ok(())
}

#[test]
fn inner_merge_rejects_shared_columns() -> Result<()> {
    let df = SALES.frame()?;
    let err = df.inner_merge(&SALES_CONCAT.frame()?, "ID").unwrap_err();
    assert!(matches!(err, FrameError::DuplicateColumn(_)));
    Ok(())
}

#[test]
fn concat_stacks_rows() -> Result<()> {
    let left = SALES.frame()?;
    let right = SALES_CONCAT.frame()?;
    let all = left.concat_frames(&right)?;

    assert_eq!(all.count_records(), 20);
    assert_eq!(all.sum("Cost")?, 6521.0 + 579.0);
    assert_eq!(all.sum("Weight")?, 3376.0 + 445.0);
    assert_eq!(left.count_records(), 10);
    assert_eq!(right.count_records(), 10);
    Ok(())
}

#[test]
fn concat_guards_schema() -> Result<()> {
    let left = SALES.frame()?;
    let narrow = left.remove_columns(&["Weight"])?;
    assert!(matches!(
        left.concat_frames(&narrow),
        Err(FrameError::ColumnCountMismatch { left: 6, right: 5 })
    ));

    let reordered = left.keep_columns(&[
        "ID",
        "Date",
        "Weight",
        "Cost",
        "First Name",
        "Last Name",
    ])?;
    match left.concat_frames(&reordered) {
        Err(FrameError::ColumnOrderMismatch {
            position,
            left,
            right,
        }) => {
            assert_eq!(position, 2);
            assert_eq!(left, "Cost");
            assert_eq!(right, "Weight");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(left.count_records(), 10);
    Ok(())
}
