use crate::types::OutputFormat;
use anyhow::Result;
use batchrvt_core::{get_progress_number, progress_record_file_path, set_progress_number};
use std::path::Path;

pub fn path(file: &Path) -> Result<()> {
    println!("{}", progress_record_file_path(file)?.display());
    Ok(())
}

pub fn set(file: &Path, value: i64) -> Result<()> {
    let record = progress_record_file_path(file)?;
    set_progress_number(&record, value)?;
    tracing::debug!(path = %record.display(), value, "wrote progress record");
    Ok(())
}

/// Prints nothing when the session has not reported progress yet.
pub fn get(file: &Path, format: OutputFormat) -> Result<()> {
    let record = progress_record_file_path(file)?;
    let progress = match get_progress_number(&record) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(path = %record.display(), error = %err, "no progress available");
            None
        }
    };

    match (format, progress) {
        (OutputFormat::Plain, Some(value)) => println!("{}", value),
        (OutputFormat::Plain, None) => {}
        (OutputFormat::Json, progress) => {
            println!("{}", serde_json::json!({ "progressNumber": progress }))
        }
    }

    Ok(())
}
