// tests/integration.rs
use anyhow::Result;
use csvframe::testing::*;
use csvframe::*;
use rayon::prelude::*;

fn last_names(df: &DataFrame) -> Result<Vec<String>> {
    Ok(df.column_values("Last Name")?.map(str::to_string).collect())
}

#[test]
fn stack_append_exclude_then_date_filter() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let frames = load_frames(fixtures.path(), &["TestData", "TestDataConcat"])?;
    let mut df = frames[0].concat_frames(&frames[1])?;
    df.add_record(&["21", "2022-01-11", "2", "8", "Sarah", "McSarahson"])?;
    df.add_record(&["22", "2022-01-05", "3", "9", "Jack", "Jackson"])?;
    assert_eq!(df.count_records(), 22);

    let kept = df.exclude("Last Name", &["Fultz", "Highman", "Stephenson"])?;
    assert_eq!(kept.count_records(), 17);

    let recent = kept.filtered_after("Date", "2022-01-08")?;
    assert_eq!(
        last_names(&recent)?,
        ["Petruska", "Carlson", "Asherton", "McSarahson"]
    );
    Ok(())
}

#[test]
fn merge_filter_save_reload() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let mut sales = read_frame(fixtures.path(), "TestData")?;
    let locations = read_frame(fixtures.path(), "TestMergeData")?;
    sales.merge(&locations, "ID", &["City", "State"])?;

    let west = sales.filtered("State", &["WA", "ID", "AZ"])?;
    let report = west.keep_columns(&["ID", "City", "Cost"])?;
    report.save(fixtures.path(), "west")?;

    let back = read_frame(fixtures.path(), "west")?;
    assert_columns(&back, &["ID", "City", "Cost"]);
    assert_column_values(&back, "City", &["RICHLAND", "BOISE", "PHOENIX"]);
    assert_eq!(back.sum("Cost")?, 777.0 + 493.0 + 939.0);
    Ok(())
}

#[test]
fn partitioned_sums_match_whole() -> Result<()> {
    let df = SALES.frame()?.concat_frames(&SALES_CONCAT.frame()?)?;
    let parts = df.divide_and_conquer(3)?;
    let sizes: Vec<_> = parts.iter().map(DataFrame::count_records).collect();
    assert_eq!(sizes, [6, 6, 8]);

    let partial = parts
        .par_iter()
        .map(|part| part.sum("Cost"))
        .collect::<FrameResult<Vec<f64>>>()?;
    assert_eq!(partial.iter().sum::<f64>(), df.sum("Cost")?);
    assert_eq!(df.sum("Cost")?, 6521.0 + 579.0);
    Ok(())
}

#[test]
fn bulk_update_then_sort() -> Result<()> {
    let mut df = SALES.frame()?;
    for mut row in df.rows_mut() {
        let weight = row.convert_to_int("Weight")?;
        row.update("Weight", (weight * 2).to_string())?;
    }
    assert_eq!(df.sum("Weight")?, 2.0 * 3376.0);

    df.sort("Weight", false)?;
    assert_eq!(df.row(0).unwrap().val("Last Name")?, "Curtis");
    assert_eq!(df.row(9).unwrap().val("Last Name")?, "Petruska");
    Ok(())
}
