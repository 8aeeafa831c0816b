use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use normalize::pipeline::{NormalizeEvent, NormalizeEvents};
use simplelog::LevelFilter;
use utils::cli::{FAILURE_EXIT_CODE, UsageStream};

/// Chooses the header row of a raw CSV, cleans the header names, and drops empty columns.
#[derive(Parser, Debug)]
#[command(name = "preprocess-csv", version)]
pub struct Args {
    /// Path to the raw CSV.
    input_csv: PathBuf,

    /// Path to write the cleaned CSV to.
    output_csv: PathBuf,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

/// Prints progress of normalization to stdout.
struct ShapePrinter;

impl NormalizeEvents for ShapePrinter {
    fn on_event(&mut self, event: NormalizeEvent<'_>) {
        println!("{}", describe_event(&event));
    }
}

fn describe_event(event: &NormalizeEvent<'_>) -> String {
    use NormalizeEvent::*;
    match event {
        Loaded { shape } => format!("Initial table shape: {shape:?}"),
        HeaderCleaned { shape } => format!("Shape after header cleanup: {shape:?}"),
        ColumnsPruned { shape } => {
            format!("Shape after dropping completely empty columns: {shape:?}")
        }
        Saved { path } => format!("Processed CSV saved to {}", path.display()),
    }
}

pub fn run(args: &Args) -> Result<()> {
    normalize::preprocess_csv(&args.input_csv, Some(&args.output_csv), &mut ShapePrinter)?;
    Ok(())
}

pub fn main() -> ExitCode {
    let args = match utils::cli::parse_args::<Args>(UsageStream::Stdout) {
        Ok(args) => args,
        Err(exit_code) => return exit_code,
    };

    if let Err(err) = utils::logging::init(args.log_level) {
        println!("Error during preprocessing: {err:#}");
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error during preprocessing: {err:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn test_describes_shapes() {
        expect_that!(
            describe_event(&NormalizeEvent::Loaded { shape: (4, 2) }),
            eq("Initial table shape: (4, 2)")
        );
        expect_that!(
            describe_event(&NormalizeEvent::HeaderCleaned { shape: (2, 2) }),
            eq("Shape after header cleanup: (2, 2)")
        );
        expect_that!(
            describe_event(&NormalizeEvent::ColumnsPruned { shape: (2, 1) }),
            eq("Shape after dropping completely empty columns: (2, 1)")
        );
    }

    #[gtest]
    fn test_describes_saved_path() {
        let path = Path::new("/tmp/clean.csv");
        expect_that!(
            describe_event(&NormalizeEvent::Saved { path }),
            eq("Processed CSV saved to /tmp/clean.csv")
        );
    }

    #[gtest]
    fn test_requires_two_paths() {
        expect_that!(
            Args::try_parse_from(["preprocess-csv", "in.csv"]),
            err(anything())
        );
        expect_that!(
            Args::try_parse_from(["preprocess-csv", "a.csv", "b.csv", "c.csv"]),
            err(anything())
        );
    }

    #[gtest]
    fn test_parses_paths_and_log_level() -> anyhow::Result<()> {
        let args =
            Args::try_parse_from(["preprocess-csv", "--log-level", "debug", "in.csv", "out.csv"])?;
        expect_that!(args.input_csv, eq(&PathBuf::from("in.csv")));
        expect_that!(args.output_csv, eq(&PathBuf::from("out.csv")));
        expect_that!(args.log_level, eq(LevelFilter::Debug));
        Ok(())
    }
}
