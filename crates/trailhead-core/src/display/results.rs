//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::Path};

use crate::models::ImportSummary;

/// Wrapper type for displaying the result of a seed import.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use trailhead_core::{display::ImportResult, models::ImportSummary};
///
/// let summary = ImportSummary { courses: 12, students: 3 };
/// let output = format!("{}", ImportResult::new(summary, Path::new("seed.json")));
/// assert!(output.contains("12 courses"));
/// ```
pub struct ImportResult<'a> {
    pub summary: ImportSummary,
    pub source: &'a Path,
}

impl<'a> ImportResult<'a> {
    /// Create a new ImportResult wrapper.
    pub fn new(summary: ImportSummary, source: &'a Path) -> Self {
        Self { summary, source }
    }
}

impl fmt::Display for ImportResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported `{}`", self.source.display())?;
        writeln!(f)?;
        writeln!(f, "- Courses: {} courses", self.summary.courses)?;
        writeln!(f, "- Students: {} students", self.summary.students)
    }
}
