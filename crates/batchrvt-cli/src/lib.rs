mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{BatchCommand, Cli, Commands, ProgressCommand};
pub use commands::run;
