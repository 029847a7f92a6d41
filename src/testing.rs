//! Testing utilities for code built on csvframe.
//!
//! - **Fixtures**: the sales data set and its variations as CSV text, plus a
//!   [`FixtureDir`] that writes them all into a temporary directory
//! - **Assertions**: compare frame columns, column values and whole frames
//!   with readable panic messages
//!
//! # Quick Start
//!
//! ```
//! use csvframe::read_frame;
//! use csvframe::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let fixtures = FixtureDir::new()?;
//! let df = read_frame(fixtures.path(), SALES.name)?;
//! let fultz = df.filtered("Last Name", &["Fultz"])?;
//! assert_column_values(&fultz, "First Name", &["Kevin", "Beth", "Avery"]);
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
