//! Utilities used in tests in multiple crates within the workspace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};
use table::Table;

/// Builds a [Table] from string slices.
pub fn table_of(rows: &[&[&str]]) -> Table {
    Table::from(rows.iter().map(|row| row.iter().copied()))
}

/// Creates a matcher against a [Table] that checks its `(rows, columns)` shape.
pub fn has_shape(rows: usize, columns: usize) -> HasShape {
    HasShape {
        shape: (rows, columns),
    }
}

pub struct HasShape {
    shape: (usize, usize),
}

impl MatcherBase for HasShape {}

impl<'a> Matcher<&'a Table> for HasShape {
    fn matches(&self, actual: &'a Table) -> MatcherResult {
        (actual.shape() == self.shape).into()
    }

    fn explain_match(&self, actual: &'a Table) -> Description {
        format!("which has shape {:?}", actual.shape()).into()
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!("has shape {:?}", self.shape).into(),
            MatcherResult::NoMatch => format!("does not have shape {:?}", self.shape).into(),
        }
    }
}

/// Temporary directory for test input and output files, removed on drop.
pub struct ScratchDir {
    dir: tempfile::TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("creating scratch directory")?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to the file `name`, returning its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents).with_context(|| format!("writing {path:?}"))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        std::fs::read_to_string(&path).with_context(|| format!("reading {path:?}"))
    }

    /// Sorted names of every entry in the directory.
    pub fn file_names(&self) -> Result<Vec<String>> {
        let mut names = std::fs::read_dir(self.dir.path())?
            .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<String>>>()?;
        names.sort();
        Ok(names)
    }
}
