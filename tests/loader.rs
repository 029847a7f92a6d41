// tests/loader.rs
use anyhow::Result;
use csvframe::testing::*;
use csvframe::*;

#[test]
fn load_frames_keeps_input_order() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let names = [
        "TestData.csv",
        "TestDataConcat.csv",
        "TestMergeData.csv",
        "TestInnerMergeData.csv",
        "TestDataDateFormat.csv",
        "TestDataInnerDuplicate.csv",
    ];
    let frames = load_frames(fixtures.path(), &names)?;

    assert_eq!(frames.len(), names.len());
    let expected = [
        SALES,
        SALES_CONCAT,
        LOCATIONS,
        LOCATIONS_PARTIAL,
        SALES_SLASH_DATES,
        SALES_DUPLICATE_KEY,
    ];
    for (frame, fixture) in frames.iter().zip(expected) {
        assert_frames_equal(frame, &fixture.frame()?);
    }
    Ok(())
}

#[test]
fn duplicate_names_load_twice() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let frames = load_frames(fixtures.path(), &["TestData", "TestData", "TestDataConcat"])?;
    assert_eq!(frames.len(), 3);
    assert_frames_equal(&frames[0], &frames[1]);
    assert_eq!(frames[2].row(0).unwrap().val("ID")?, "11");
    Ok(())
}

#[test]
fn loaded_frames_concat() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let frames = load_frames(fixtures.path(), &["TestData", "TestDataConcat"])?;
    let all = frames[0].concat_frames(&frames[1])?;
    assert_eq!(all.count_records(), 20);
    Ok(())
}

#[test]
fn single_worker_still_loads_everything() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let loader = FrameLoader::new(LoaderConfig::default().with_workers(1));
    let frames = loader.load(fixtures.path(), &["TestMergeData", "TestData"])?;
    assert_eq!(frames[0].column_count(), 4);
    assert_eq!(frames[1].column_count(), 6);
    Ok(())
}

#[test]
fn too_few_files() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        load_frames(".", &empty),
        Err(FrameError::InsufficientInput {
            required: 2,
            found: 0
        })
    ));
    assert!(matches!(
        load_frames(".", &["TestData"]),
        Err(FrameError::InsufficientInput { found: 1, .. })
    ));
}

#[test]
fn failing_file_is_named() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    fixtures.write("broken.csv", "ID,Name\n1\n")?;
    let err = load_frames(fixtures.path(), &["TestData", "broken", "TestDataConcat"]).unwrap_err();
    match err {
        FrameError::LoadFailed { file, source } => {
            assert_eq!(file, fixtures.file("broken.csv"));
            assert!(matches!(*source, FrameError::Csv(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn loader_from_config_file() -> Result<()> {
    let fixtures = FixtureDir::new()?;
    let config_path = fixtures.write("loader.json", r#"{ "workers": 2 }"#)?;
    let loader = FrameLoader::new(LoaderConfig::from_json_file(&config_path)?);
    assert_eq!(loader.config().workers, 2);

    let frames = loader.load(fixtures.path(), &["TestData", "TestDataDateFormat", "TestDataConcat"])?;
    assert_eq!(frames.len(), 3);
    Ok(())
}
