use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

use super::error::Error;
use common::types::SizeResult;

/// Writes size-results as CSV with an `n,aos_mean,soa_mean` header, replacing any existing file.
pub fn write_results(path: &Path, results: &[SizeResult]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| {
        log::error!("Failed to create file {}: {:?}", path.display(), e);
        Error::IoError(e)
    })?;

    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(file);

    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;

    log::info!(
        "CsvWriter: wrote {} results to {}",
        results.len(),
        path.display()
    );
    Ok(())
}
