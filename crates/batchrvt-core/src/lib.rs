pub mod path;
pub mod script_data_file;
pub mod script_data_util;

pub use batchrvt_types::{Error, ErrorKind, Result};
pub use path::{DATA_PATH_ENV, expand_tilde, resolve_data_folder};
pub use script_data_file::ScriptDataFile;
pub use script_data_util::*;
