use crate::types::{LogLevel, OutputFormat};
use batchrvt_types::{CentralFileOpenMode, ProcessingMode, WorksetConfiguration};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batchrvt-session")]
#[command(about = "Inspect and edit batch session script data and progress records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data folder holding session files (defaults to BATCHRVT_DATA_PATH or the system data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a script data file with a fresh session id
    New {
        #[arg(long)]
        revit_file: Option<String>,

        #[arg(long)]
        task_script: Option<String>,

        #[arg(long)]
        task_data: Option<String>,

        #[arg(long)]
        processing_mode: Option<ProcessingMode>,

        #[arg(long)]
        central_file_open_mode: Option<CentralFileOpenMode>,

        #[arg(long)]
        workset_configuration: Option<WorksetConfiguration>,

        #[arg(long)]
        progress_max: Option<i64>,

        /// Associated data entry (repeatable)
        #[arg(long = "associated")]
        associated_data: Vec<String>,
    },

    /// Print a script data file
    Show { file: PathBuf },

    Batch {
        #[command(subcommand)]
        command: BatchCommand,
    },

    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },
}

#[derive(Subcommand)]
pub enum BatchCommand {
    /// List the records of a batch file
    List { file: PathBuf },

    /// Write the given script data files into one batch file
    Merge {
        output: PathBuf,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProgressCommand {
    /// Print the progress record path of a script data file
    Path { file: PathBuf },

    /// Write the progress number of a script data file's session
    Set {
        file: PathBuf,

        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Print the progress number of a script data file's session, if any
    Get { file: PathBuf },
}
