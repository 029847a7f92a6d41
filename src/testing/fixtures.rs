//! Fixture CSV data sets and a temporary directory that holds them.
//!
//! The sales set ([`SALES`]) is the base: ten people with an ISO date, a
//! cost and a weight. The other sets are variations on it used to exercise
//! specific behaviour (byte order marks, slash dates, stacking, merges).

use crate::error::FrameResult;
use crate::frame::DataFrame;
use crate::io::csv::read_frame_from_reader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A named CSV document.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub contents: &'static str,
}

impl Fixture {
    /// Parse the fixture without touching the filesystem.
    ///
    /// # Errors
    /// Only if the fixture text itself is malformed.
    pub fn frame(&self) -> FrameResult<DataFrame> {
        read_frame_from_reader(self.contents.as_bytes())
    }
}

/// Ten rows: `ID,Date,Cost,Weight,First Name,Last Name`.
///
/// Cost sums to 6521, Weight to 3376. Dates run 2022-01-01 to 2022-01-10.
pub const SALES: Fixture = Fixture {
    name: "TestData.csv",
    contents: "\
ID,Date,Cost,Weight,First Name,Last Name
1,2022-01-01,818,286,Kevin,Fultz
2,2022-01-02,777,324,Beth,Fultz
3,2022-01-03,493,463,Avery,Fultz
4,2022-01-04,121,196,Peter,Wiedmann
5,2022-01-05,774,415,Andy,Wiedmann
6,2022-01-06,874,214,Nick,Wilfong
7,2022-01-07,995,500,Bryan,Curtis
8,2022-01-08,133,346,Brian,Wenck
9,2022-01-09,939,157,Eric,Petruska
10,2022-01-10,597,475,Carl,Carlson
",
};

/// [`SALES`] saved with a UTF-8 byte order mark before the `ID` header.
pub const SALES_BOM: Fixture = Fixture {
    name: "TestDataCommaSeparatedValue.csv",
    contents: "\u{FEFF}\
ID,Date,Cost,Weight,First Name,Last Name
1,2022-01-01,818,286,Kevin,Fultz
2,2022-01-02,777,324,Beth,Fultz
3,2022-01-03,493,463,Avery,Fultz
4,2022-01-04,121,196,Peter,Wiedmann
5,2022-01-05,774,415,Andy,Wiedmann
6,2022-01-06,874,214,Nick,Wilfong
7,2022-01-07,995,500,Bryan,Curtis
8,2022-01-08,133,346,Brian,Wenck
9,2022-01-09,939,157,Eric,Petruska
10,2022-01-10,597,475,Carl,Carlson
",
};

/// [`SALES`] with `M/D/YY` dates.
pub const SALES_SLASH_DATES: Fixture = Fixture {
    name: "TestDataDateFormat.csv",
    contents: "\
ID,Date,Cost,Weight,First Name,Last Name
1,1/1/22,818,286,Kevin,Fultz
2,1/2/22,777,324,Beth,Fultz
3,1/3/22,493,463,Avery,Fultz
4,1/4/22,121,196,Peter,Wiedmann
5,1/5/22,774,415,Andy,Wiedmann
6,1/6/22,874,214,Nick,Wilfong
7,1/7/22,995,500,Bryan,Curtis
8,1/8/22,133,346,Brian,Wenck
9,1/9/22,939,157,Eric,Petruska
10,1/10/22,597,475,Carl,Carlson
",
};

/// Ten more people (IDs 11 to 20) with the [`SALES`] columns.
///
/// Cost sums to 579, Weight to 445.
pub const SALES_CONCAT: Fixture = Fixture {
    name: "TestDataConcat.csv",
    contents: "\
ID,Date,Cost,Weight,First Name,Last Name
11,2022-01-02,12,41,Ben,Benny
12,2022-01-03,45,38,Ken,Kenny
13,2022-01-04,78,52,Carl,McCarlson
14,2022-01-05,33,29,Jeff,Jeffery
15,2022-01-12,91,47,Steve,Stephenson
16,2022-01-06,64,61,Pat,Patrickman
17,2022-01-07,27,33,Bria,Briarson
18,2022-01-08,58,44,Erica,Ericson
19,2022-01-15,83,56,Ash,Asherton
20,2022-01-20,88,44,Hank,Highman
",
};

/// Location for every [`SALES`] ID: `ID,City,State,Postal Code`.
///
/// Postal codes sum to 580011.
pub const LOCATIONS: Fixture = Fixture {
    name: "TestMergeData.csv",
    contents: "\
ID,City,State,Postal Code
1,AUSTIN,TX,73301
2,RICHLAND,WA,99354
3,BOISE,ID,83702
4,VAN BUREN,AR,72956
5,TAUNTON,MA,2780
6,FISHERS,NY,14453
7,GOLDSBORO,NC,27530
8,DULUTH,MN,55802
9,PHOENIX,AZ,85024
10,JEFFERSON CITY,MO,65109
",
};

/// Partial locations: some [`SALES`] IDs, a repeated ID 9 (PHOENIX first)
/// and two IDs with no sales row.
pub const LOCATIONS_PARTIAL: Fixture = Fixture {
    name: "TestInnerMergeData.csv",
    contents: "\
ID,City,State,Postal Code
4,VAN BUREN,AR,72956
5,TAUNTON,MA,2780
7,GOLDSBORO,NC,27530
9,PHOENIX,AZ,85024
9,TEMPE,AZ,85281
10,JEFFERSON CITY,MO,65109
12,SALEM,OR,97301
15,TULSA,OK,74103
",
};

/// [`SALES`] with a second ID 9 row directly after the first.
pub const SALES_DUPLICATE_KEY: Fixture = Fixture {
    name: "TestDataInnerDuplicate.csv",
    contents: "\
ID,Date,Cost,Weight,First Name,Last Name
1,2022-01-01,818,286,Kevin,Fultz
2,2022-01-02,777,324,Beth,Fultz
3,2022-01-03,493,463,Avery,Fultz
4,2022-01-04,121,196,Peter,Wiedmann
5,2022-01-05,774,415,Andy,Wiedmann
6,2022-01-06,874,214,Nick,Wilfong
7,2022-01-07,995,500,Bryan,Curtis
8,2022-01-08,133,346,Brian,Wenck
9,2022-01-09,939,157,Eric,Petruska
9,2022-01-09,12345,6789,Eric,Petruska
10,2022-01-10,597,475,Carl,Carlson
",
};

/// Every fixture, in the order they are written by [`FixtureDir::new`].
pub const ALL_FIXTURES: [Fixture; 7] = [
    SALES,
    SALES_BOM,
    SALES_SLASH_DATES,
    SALES_CONCAT,
    LOCATIONS,
    LOCATIONS_PARTIAL,
    SALES_DUPLICATE_KEY,
];

/// A temporary directory pre-populated with [`ALL_FIXTURES`].
///
/// The directory and everything in it is removed on drop.
///
/// ```
/// use csvframe::read_frame;
/// use csvframe::testing::{FixtureDir, SALES};
///
/// # fn main() -> anyhow::Result<()> {
/// let fixtures = FixtureDir::new()?;
/// let df = read_frame(fixtures.path(), SALES.name)?;
/// assert_eq!(df.count_records(), 10);
/// # Ok(())
/// # }
/// ```
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// # Errors
    /// Returns an error if the directory or a fixture file cannot be
    /// created.
    pub fn new() -> io::Result<Self> {
        let fixtures = Self {
            dir: tempfile::tempdir()?,
        };
        for fixture in ALL_FIXTURES {
            fixtures.write(fixture.name, fixture.contents)?;
        }
        Ok(fixtures)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Full path of `name` inside the directory. The file need not exist.
    #[must_use]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an extra file into the directory and return its path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.file(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_parses() -> anyhow::Result<()> {
        for fixture in ALL_FIXTURES {
            let df = fixture.frame()?;
            assert!(df.count_records() > 0, "{} is empty", fixture.name);
        }
        Ok(())
    }

    #[test]
    fn fixture_dir_writes_all_files() -> anyhow::Result<()> {
        let fixtures = FixtureDir::new()?;
        for fixture in ALL_FIXTURES {
            assert!(fixtures.file(fixture.name).is_file());
        }
        Ok(())
    }
}
