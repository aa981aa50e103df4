use super::show::render_plain;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use batchrvt_core::{ScriptDataFile, load_many_from_file, save_many_to_file};
use batchrvt_types::ScriptData;
use std::path::{Path, PathBuf};

pub fn list(file: &Path, format: OutputFormat) -> Result<()> {
    let records = load_many_from_file(file)?;

    match format {
        OutputFormat::Plain => {
            for (index, data) in records.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("# {}", index + 1);
                print!("{}", render_plain(data, false));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    Ok(())
}

pub fn merge(output: &Path, files: &[PathBuf]) -> Result<()> {
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        let mut data = ScriptData::new();
        data.load_from_file(file)
            .with_context(|| format!("could not load {}", file.display()))?;
        records.push(data);
    }

    save_many_to_file(output, &records)?;
    println!("Wrote {} record(s) to {}", records.len(), output.display());
    Ok(())
}
