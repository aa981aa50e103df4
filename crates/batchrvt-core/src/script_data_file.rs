//! Reading and writing a single script data record as a JSON file.

use batchrvt_types::{Error, Result, ScriptData};
use serde_json::Value;
use std::path::Path;

/// File persistence for [`ScriptData`].
///
/// Writes overwrite the destination directly; a reader racing a writer may
/// see a partially written file and should treat the failure as transient.
pub trait ScriptDataFile {
    /// Load the JSON object stored at `path` into `self`.
    ///
    /// A missing file yields [`Error::NotFound`] and leaves `self` untouched.
    /// Fields already applied before a failure are not rolled back.
    fn load_from_file(&mut self, path: &Path) -> Result<()>;

    /// Store `self` as indented JSON at `path`, creating missing parent directories.
    fn save_to_file(&self, path: &Path) -> Result<()>;
}

impl ScriptDataFile for ScriptData {
    fn load_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let content = read_text(path)?;
        let value: Value = serde_json::from_str(&content)?;
        let Some(object) = value.as_object() else {
            return Err(Error::Malformed(format!(
                "{} does not contain a JSON object",
                path.display()
            )));
        };

        self.load(object);
        tracing::debug!(path = %path.display(), "loaded script data");
        Ok(())
    }

    fn save_to_file(&self, path: &Path) -> Result<()> {
        write_text(path, &self.to_json_string())?;
        tracing::debug!(path = %path.display(), "saved script data");
        Ok(())
    }
}

/// Read the whole file at `path` as UTF-8, dropping a leading byte-order mark.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let mut content = std::fs::read_to_string(path).map_err(|err| Error::from_read(err, path))?;
    if content.starts_with('\u{feff}') {
        content.drain(..'\u{feff}'.len_utf8());
    }
    Ok(content)
}

/// Create missing parent directories and overwrite `path` with `content`.
pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    Ok(())
}
