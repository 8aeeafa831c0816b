use std::{num::NonZeroU32, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use extraction::{
    ConcatMode, ExtractConfig, ExtractionMethod, Extractor, batch::DEFAULT_BATCH_SIZE,
    extractor::LogEvents, outpath, pagecount::PdfiumPageCounter, tabulareader::TabulaDetector,
};
use simplelog::LevelFilter;
use utils::cli::{FAILURE_EXIT_CODE, UsageStream};

use crate::distpaths;

/// Extracts every table in a PDF into a single CSV file alongside it.
///
/// On success, the absolute path of the CSV file is the only output.
#[derive(Parser, Debug)]
#[command(name = "extract-tables", version)]
pub struct Args {
    /// Path to input PDF.
    pdf_path: PathBuf,

    /// Options relating to table extraction.
    #[command(flatten)]
    extract: ExtractArgs,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

/// CLI arguments relating to [ExtractConfig] and the libraries that extraction uses.
#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Path to the Tabula JAR file. Defaults to tabula.jar alongside this program, if present.
    #[arg(long)]
    tabula_jar: Option<String>,

    /// Path to the Pdfium shared library file. Defaults to the system's Pdfium library.
    #[arg(long)]
    pdfium_library: Option<PathBuf>,

    /// Maximum number of pages to detect tables in per call to Tabula.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: NonZeroU32,

    /// Table detection algorithm.
    #[arg(long, value_enum, default_value_t = ExtractionMethod::Lattice)]
    method: ExtractionMethod,

    /// Let Tabula guess the area of each page that contains tables.
    #[arg(long)]
    guess: bool,

    /// Password to open an encrypted PDF.
    #[arg(long)]
    password: Option<String>,

    /// Treat the first row of each table as a header, and align columns with the same header
    /// across tables, rather than concatenating raw rows.
    #[arg(long)]
    align_headers: bool,
}

impl ExtractArgs {
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig {
            batch_size: self.batch_size,
            method: self.method,
            guess: self.guess,
            password: self.password.clone(),
            concat_mode: if self.align_headers {
                ConcatMode::AlignHeaders
            } else {
                ConcatMode::Rows
            },
        }
    }

    fn tabula_jar(&self) -> Result<String> {
        self.tabula_jar
            .clone()
            .or_else(distpaths::tabula_jar)
            .ok_or_else(|| {
                anyhow!("--tabula-jar must be specified, as tabula.jar could not be located")
            })
    }
}

/// Extracts the tables, returning the path of the CSV file written.
pub fn run(args: &Args) -> Result<PathBuf> {
    let output_path = outpath::output_csv_path(&args.pdf_path)?;
    let config = args.extract.config();
    log::info!(
        "Extracting tables from {:?} into {:?}.",
        args.pdf_path,
        output_path
    );

    let page_counter = PdfiumPageCounter::new(args.extract.pdfium_library.as_deref())?;

    let vm = tabula::TabulaVM::new(&args.extract.tabula_jar()?, false)
        .context("starting Tabula JVM")?;
    let tabula_env = vm.attach().context("attaching to TabulaVM")?;
    let detector = TabulaDetector::new(tabula_env);

    Extractor::new(&page_counter, &detector, &config).extract_to_csv(
        &args.pdf_path,
        &output_path,
        &mut LogEvents,
    )?;

    Ok(output_path)
}

pub fn main() -> ExitCode {
    let args = match utils::cli::parse_args::<Args>(UsageStream::Stderr) {
        Ok(args) => args,
        Err(exit_code) => return exit_code,
    };

    if let Err(err) = utils::logging::init(args.log_level) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    match run(&args) {
        Ok(output_path) => {
            println!("{}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
