pub mod error;
pub mod options;
pub mod script_data;
pub mod setting;

pub use error::{Error, ErrorKind, Result};
pub use options::{CentralFileOpenMode, ProcessingMode, WorksetConfiguration};
pub use script_data::ScriptData;
pub use setting::{SettingValue, load_setting, store_setting};
