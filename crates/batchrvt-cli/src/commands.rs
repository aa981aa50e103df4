use super::args::{BatchCommand, Cli, Commands, ProgressCommand};
use super::handlers;
use anyhow::Result;
use batchrvt_core::resolve_data_folder;
use batchrvt_types::ScriptData;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New {
            revit_file,
            task_script,
            task_data,
            processing_mode,
            central_file_open_mode,
            workset_configuration,
            progress_max,
            associated_data,
        } => {
            let data_folder = resolve_data_folder(cli.data_dir.as_deref())?;
            let data = ScriptData {
                revit_file_path: revit_file,
                task_script_file_path: task_script,
                task_data,
                processing_mode,
                central_file_open_mode,
                workset_configuration,
                progress_max,
                associated_data: Some(associated_data),
                ..ScriptData::default()
            };
            handlers::new::handle(&data_folder, data, cli.format)
        }

        Commands::Show { file } => handlers::show::handle(&file, cli.format),

        Commands::Batch { command } => match command {
            BatchCommand::List { file } => handlers::batch::list(&file, cli.format),
            BatchCommand::Merge { output, files } => handlers::batch::merge(&output, &files),
        },

        Commands::Progress { command } => match command {
            ProgressCommand::Path { file } => handlers::progress::path(&file),
            ProgressCommand::Set { file, value } => handlers::progress::set(&file, value),
            ProgressCommand::Get { file } => handlers::progress::get(&file, cli.format),
        },
    }
}
