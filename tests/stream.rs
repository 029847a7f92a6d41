// tests/stream.rs
use anyhow::Result;
use csvframe::testing::*;
use csvframe::*;

#[test]
fn stream_sums_match_frame_sums() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let mut cost = 0.0;
    let mut rows = 0;
    for record in stream_csv(fixtures.path(), "TestData")? {
        let record = record?;
        cost += record.convert_to_float("Cost")?;
        rows += 1;
    }
    assert_eq!(rows, 10);
    assert_eq!(cost, 6521.0);
    Ok(())
}

#[test]
fn stream_strips_bom() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let stream = stream_csv(fixtures.path(), "TestDataCommaSeparatedValue.csv")?;
    assert_eq!(stream.column_index().position("ID"), Some(0));

    let ids = stream
        .map(|r| r.and_then(|r| r.convert_to_int("ID")))
        .sum::<FrameResult<i64>>()?;
    assert_eq!(ids, 55);
    Ok(())
}

#[test]
fn stream_into_frame() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let stream = stream_csv(fixtures.path(), "TestDataConcat")?;
    let mut df = DataFrame::new(stream.column_index().names().to_vec())?;
    for record in stream {
        df.add_record(record?.into_record().values())?;
    }
    assert_frames_equal(&df, &SALES_CONCAT.frame()?);
    Ok(())
}

#[test]
fn stream_missing_file() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    assert!(matches!(
        stream_csv(fixtures.path(), "missing"),
        Err(FrameError::Io(_))
    ));
    Ok(())
}
