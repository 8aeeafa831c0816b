use anyhow::{Context, Result};
use simplelog::{LevelFilter, WriteLogger};

/// Initialises the global logger to write to standard error at `level`.
///
/// Standard output is left to each program's own results.
pub fn init(level: LevelFilter) -> Result<()> {
    WriteLogger::init(level, simplelog::Config::default(), std::io::stderr())
        .context("configuring logging")
}
