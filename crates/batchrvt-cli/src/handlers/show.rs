use crate::types::OutputFormat;
use anyhow::Result;
use batchrvt_core::ScriptDataFile;
use batchrvt_types::ScriptData;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let mut data = ScriptData::new();
    data.load_from_file(file)?;

    match format {
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", render_plain(&data, color));
        }
        OutputFormat::Json => println!("{}", data.to_json_string()),
    }

    Ok(())
}

/// One `key: value` line per set field, in stored key order.
pub fn render_plain(data: &ScriptData, color: bool) -> String {
    let mut out = String::new();
    let value = data.to_json_value();
    let Some(object) = value.as_object() else {
        return out;
    };

    for (key, value) in object {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };

        if color {
            out.push_str(&format!("{}: {}\n", key.bold(), text));
        } else {
            out.push_str(&format!("{}: {}\n", key, text));
        }
    }

    out
}
