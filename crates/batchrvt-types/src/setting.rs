//! Typed setting values and their JSON representation.
//!
//! Each value type reads itself from a JSON node and writes itself back.
//! Reading never fails: a node of the wrong shape yields `None` and the
//! caller keeps whatever it had.

use crate::options::{CentralFileOpenMode, ProcessingMode, WorksetConfiguration};
use serde_json::Value;

pub trait SettingValue: Sized {
    /// Read a value from a JSON node, or `None` if the node has the wrong shape
    fn from_json(value: &Value) -> Option<Self>;

    fn to_json(&self) -> Value;
}

impl SettingValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl SettingValue for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl SettingValue for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl SettingValue for Vec<String> {
    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::String).collect())
    }
}

impl SettingValue for ProcessingMode {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str()?.parse().ok()
    }

    fn to_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl SettingValue for CentralFileOpenMode {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str()?.parse().ok()
    }

    fn to_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl SettingValue for WorksetConfiguration {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str()?.parse().ok()
    }

    fn to_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

/// Load `value` into `slot`.
///
/// `null` and values of the wrong shape leave `slot` untouched.
pub fn load_setting<T: SettingValue>(slot: &mut Option<T>, value: &Value) {
    if let Some(loaded) = T::from_json(value) {
        *slot = Some(loaded);
    }
}

/// JSON representation of a setting; unset is `null`.
pub fn store_setting<T: SettingValue>(slot: &Option<T>) -> Value {
    match slot {
        Some(value) => value.to_json(),
        None => Value::Null,
    }
}
