
use std::path::Path;

use table::{Table, csvio};

use crate::{
    ExtractConfig, ExtractError,
    batch::{PageRange, page_batches},
    detector::{DetectionRequest, TableDetector},
    pagecount::PageCounter,
};

/// Progress of an extraction run.
#[derive(Debug)]
pub enum ExtractEvent {
    /// The document was opened and split into `num_batches` batches.
    Opened { num_pages: u32, num_batches: usize },
    /// Table detection is about to run on a batch.
    BatchStarted { index: usize, range: PageRange },
    /// Table detection completed on a batch, finding `num_tables` non-empty tables.
    BatchCompleted { range: PageRange, num_tables: usize },
}

/// Receives [ExtractEvent]s.
pub trait ExtractEvents {
    fn on_event(&mut self, event: ExtractEvent);
}

/// [ExtractEvents] that logs each event.
pub struct LogEvents;

impl ExtractEvents for LogEvents {
    fn on_event(&mut self, event: ExtractEvent) {
        match event {
            ExtractEvent::Opened {
                num_pages,
                num_batches,
            } => log::info!("PDF has {num_pages} page(s), processing in {num_batches} batch(es)."),
            ExtractEvent::BatchStarted { index, range } => {
                log::info!("Processing batch {} (pages {range}).", index + 1)
            }
            ExtractEvent::BatchCompleted { range, num_tables } => {
                log::debug!("Found {num_tables} table(s) on pages {range}.")
            }
        }
    }
}

/// Extracts all tables from a PDF in page batches.
pub struct Extractor<'a> {
    page_counter: &'a dyn PageCounter,
    detector: &'a dyn TableDetector,
    config: &'a ExtractConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(
        page_counter: &'a dyn PageCounter,
        detector: &'a dyn TableDetector,
        config: &'a ExtractConfig,
    ) -> Self {
        Self {
            page_counter,
            detector,
            config,
        }
    }

    /// Detects the tables on every page of `pdf_path` and combines them into one table.
    ///
    /// Stops at the first batch that fails. Tables with no rows are ignored.
    pub fn extract_tables(
        &self,
        pdf_path: &Path,
        events: &mut dyn ExtractEvents,
    ) -> Result<Table, ExtractError> {
        let password = self.config.password.as_deref();

        let num_pages = self
            .page_counter
            .count_pages(pdf_path, password)
            .map_err(|cause| ExtractError::DocumentRead {
                path: pdf_path.to_owned(),
                cause,
            })?;

        let batches = page_batches(num_pages, self.config.batch_size);
        events.on_event(ExtractEvent::Opened {
            num_pages,
            num_batches: batches.len(),
        });

        let mut tables = Vec::new();
        for (index, range) in batches.into_iter().enumerate() {
            events.on_event(ExtractEvent::BatchStarted { index, range });

            let request = DetectionRequest {
                pdf_path,
                pages: range,
                method: self.config.method,
                guess: self.config.guess,
                password,
            };
            let found = self
                .detector
                .detect_tables(&request)
                .map_err(|cause| ExtractError::Extraction { range, cause })?;

            let num_tables_before = tables.len();
            tables.extend(found.into_iter().filter(|table| !table.is_empty()));
            events.on_event(ExtractEvent::BatchCompleted {
                range,
                num_tables: tables.len() - num_tables_before,
            });
        }

        if tables.is_empty() {
            return Err(ExtractError::NoTablesFound {
                path: pdf_path.to_owned(),
            });
        }

        Ok(self.config.concat_mode.concat(tables))
    }

    /// As [Extractor::extract_tables], then writes the result to `output_path` as CSV.
    ///
    /// Nothing is written unless extraction succeeds.
    pub fn extract_to_csv(
        &self,
        pdf_path: &Path,
        output_path: &Path,
        events: &mut dyn ExtractEvents,
    ) -> Result<(), ExtractError> {
        let table = self.extract_tables(pdf_path, events)?;
        csvio::write_csv(output_path, &table).map_err(|cause| ExtractError::Output {
            path: output_path.to_owned(),
            cause,
        })
    }
}
