use crate::types::OutputFormat;
use anyhow::Result;
use batchrvt_core::create_script_data_file;
use batchrvt_types::ScriptData;
use serde_json::json;
use std::path::Path;

pub fn handle(data_folder: &Path, mut data: ScriptData, format: OutputFormat) -> Result<()> {
    let path = create_script_data_file(data_folder, &mut data)?;
    tracing::info!(path = %path.display(), "created session script data");

    match format {
        OutputFormat::Plain => println!("{}", path.display()),
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "sessionId": data.session_id,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
