//! Bulk script data files, session file naming and progress records.
//!
//! Session files live side by side in the data folder and share the
//! session's uuid:
//!
//! ```text
//! <data folder>/Session.ScriptData.<uuid>.json      script data
//! <data folder>/Session.ProgressRecord.<uuid>.json  progress record
//! ```
//!
//! A progress record is plain text holding one base-10 integer. It has a
//! single writer (the running session) and is polled by monitors, which
//! treat any read failure as "no progress yet".

use crate::path;
use crate::script_data_file::{ScriptDataFile, read_text, write_text};
use batchrvt_types::{Error, Result, ScriptData};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const SCRIPT_DATA_FILE_PREFIX: &str = "Session.ScriptData.";
pub const PROGRESS_RECORD_FILE_PREFIX: &str = "Session.ProgressRecord.";
pub const SESSION_FILE_EXTENSION: &str = ".json";

/// Load every record stored in the JSON array at `path`.
///
/// Array elements that are not objects are skipped. Any failure yields an
/// error rather than a partial list.
pub fn load_many_from_file(path: &Path) -> Result<Vec<ScriptData>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let content = read_text(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let Value::Array(items) = value else {
        return Err(Error::Malformed(format!(
            "{} does not contain a JSON array",
            path.display()
        )));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(object) => {
                let mut data = ScriptData::new();
                data.load(object);
                records.push(data);
            }
            _ => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    "skipping non-object element in script data array"
                );
            }
        }
    }

    Ok(records)
}

/// Store `records` as an indented JSON array at `path`, in order.
pub fn save_many_to_file(path: &Path, records: &[ScriptData]) -> Result<()> {
    let items = records.iter().map(ScriptData::to_json_value).collect();
    write_text(path, &format!("{:#}", Value::Array(items)))?;
    tracing::debug!(path = %path.display(), count = records.len(), "saved script data batch");
    Ok(())
}

/// Fresh `Session.ScriptData.<uuid>.json` path inside `data_folder`
pub fn unique_script_data_file_path(data_folder: &Path) -> PathBuf {
    let session_id = uuid::Uuid::new_v4();
    data_folder.join(format!(
        "{SCRIPT_DATA_FILE_PREFIX}{session_id}{SESSION_FILE_EXTENSION}"
    ))
}

/// Fresh script data path inside the resolved data folder
pub fn get_unique_script_data_file_path() -> Result<PathBuf> {
    let data_folder = path::resolve_data_folder(None)?;
    Ok(unique_script_data_file_path(&data_folder))
}

/// Session id embedded in a `Session.ScriptData.<id>.json` file name.
///
/// Returns [`Error::InvalidPath`] when the file name does not follow that
/// convention.
pub fn session_id_from_script_data_file_path(script_data_file_path: &Path) -> Result<String> {
    let invalid = || Error::InvalidPath(script_data_file_path.to_path_buf());

    let file_name = script_data_file_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(invalid)?;

    let session_id = file_name
        .strip_prefix(SCRIPT_DATA_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(SESSION_FILE_EXTENSION))
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;

    Ok(session_id.to_string())
}

/// Progress record path belonging to a script data file.
///
/// `<dir>/Session.ScriptData.<id>.json` becomes
/// `<dir>/Session.ProgressRecord.<id>.json`.
pub fn progress_record_file_path(script_data_file_path: &Path) -> Result<PathBuf> {
    let session_id = session_id_from_script_data_file_path(script_data_file_path)?;
    let file_name = format!("{PROGRESS_RECORD_FILE_PREFIX}{session_id}{SESSION_FILE_EXTENSION}");

    Ok(match script_data_file_path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    })
}

/// Overwrite the progress record at `path` with `progress_number`.
pub fn set_progress_number(path: &Path, progress_number: i64) -> Result<()> {
    write_text(path, &progress_number.to_string())
}

/// Read the progress record at `path`.
///
/// Missing, unreadable, or non-integer content is an error; pollers should
/// treat it as "no progress yet" and try again later.
pub fn get_progress_number(path: &Path) -> Result<i64> {
    let content = read_text(path)?;
    let trimmed = content.trim();
    trimmed
        .parse::<i64>()
        .map_err(|err| Error::Malformed(format!("progress record {:?}: {}", trimmed, err)))
}

/// Save `data` under a fresh session path in `data_folder`.
///
/// An unset `session_id` is filled with the uuid from the new file name.
pub fn create_script_data_file(data_folder: &Path, data: &mut ScriptData) -> Result<PathBuf> {
    let path = unique_script_data_file_path(data_folder);
    if data.session_id.is_none() {
        data.session_id = Some(session_id_from_script_data_file_path(&path)?);
    }

    data.save_to_file(&path)?;
    Ok(path)
}
