use crate::error::{Error, Result};
use crate::options::{CentralFileOpenMode, ProcessingMode, WorksetConfiguration};
use crate::setting::{load_setting, store_setting};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Full configuration of one batch-processing session.
///
/// Every field is unset until a caller or a load assigns it. The JSON
/// representation is driven by [`FIELDS`], so keys missing from a loaded
/// object keep their current value and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptData {
    pub session_id: Option<String>,
    pub revit_file_path: Option<String>,
    pub is_cloud_model: Option<bool>,
    /// Only meaningful when `is_cloud_model` is set
    pub cloud_project_id: Option<String>,
    /// Only meaningful when `is_cloud_model` is set
    pub cloud_model_id: Option<String>,
    pub enable_data_export: Option<bool>,
    pub session_data_folder_path: Option<String>,
    /// Only meaningful when `enable_data_export` is set
    pub data_export_folder_path: Option<String>,
    pub show_message_box_on_task_error: Option<bool>,
    pub processing_mode: Option<ProcessingMode>,
    pub central_file_open_mode: Option<CentralFileOpenMode>,
    pub delete_local_after: Option<bool>,
    pub discard_worksets_on_detach: Option<bool>,
    pub workset_configuration: Option<WorksetConfiguration>,
    pub open_in_ui: Option<bool>,
    pub audit_on_opening: Option<bool>,
    pub progress_number: Option<i64>,
    pub progress_max: Option<i64>,
    pub associated_data: Option<Vec<String>>,
    pub task_script_file_path: Option<String>,
    /// Caller-defined payload handed to the task script
    pub task_data: Option<String>,
}

/// Binds one JSON key to one field of [`ScriptData`]
struct FieldBinding {
    key: &'static str,
    load: fn(&mut ScriptData, &Value),
    store: fn(&ScriptData) -> Value,
}

/// Key/field bindings, in the order keys are written.
const FIELDS: &[FieldBinding] = &[
    FieldBinding {
        key: "sessionId",
        load: |data, value| load_setting(&mut data.session_id, value),
        store: |data| store_setting(&data.session_id),
    },
    FieldBinding {
        key: "revitFilePath",
        load: |data, value| load_setting(&mut data.revit_file_path, value),
        store: |data| store_setting(&data.revit_file_path),
    },
    FieldBinding {
        key: "isCloudModel",
        load: |data, value| load_setting(&mut data.is_cloud_model, value),
        store: |data| store_setting(&data.is_cloud_model),
    },
    FieldBinding {
        key: "cloudProjectId",
        load: |data, value| load_setting(&mut data.cloud_project_id, value),
        store: |data| store_setting(&data.cloud_project_id),
    },
    FieldBinding {
        key: "cloudModelId",
        load: |data, value| load_setting(&mut data.cloud_model_id, value),
        store: |data| store_setting(&data.cloud_model_id),
    },
    FieldBinding {
        key: "enableDataExport",
        load: |data, value| load_setting(&mut data.enable_data_export, value),
        store: |data| store_setting(&data.enable_data_export),
    },
    FieldBinding {
        key: "sessionDataFolderPath",
        load: |data, value| load_setting(&mut data.session_data_folder_path, value),
        store: |data| store_setting(&data.session_data_folder_path),
    },
    FieldBinding {
        key: "dataExportFolderPath",
        load: |data, value| load_setting(&mut data.data_export_folder_path, value),
        store: |data| store_setting(&data.data_export_folder_path),
    },
    FieldBinding {
        key: "showMessageBoxOnTaskError",
        load: |data, value| load_setting(&mut data.show_message_box_on_task_error, value),
        store: |data| store_setting(&data.show_message_box_on_task_error),
    },
    FieldBinding {
        key: "revitProcessingOption",
        load: |data, value| load_setting(&mut data.processing_mode, value),
        store: |data| store_setting(&data.processing_mode),
    },
    FieldBinding {
        key: "centralFileOpenOption",
        load: |data, value| load_setting(&mut data.central_file_open_mode, value),
        store: |data| store_setting(&data.central_file_open_mode),
    },
    FieldBinding {
        key: "deleteLocalAfter",
        load: |data, value| load_setting(&mut data.delete_local_after, value),
        store: |data| store_setting(&data.delete_local_after),
    },
    FieldBinding {
        key: "discardWorksetsOnDetach",
        load: |data, value| load_setting(&mut data.discard_worksets_on_detach, value),
        store: |data| store_setting(&data.discard_worksets_on_detach),
    },
    FieldBinding {
        key: "worksetConfigurationOption",
        load: |data, value| load_setting(&mut data.workset_configuration, value),
        store: |data| store_setting(&data.workset_configuration),
    },
    FieldBinding {
        key: "openInUI",
        load: |data, value| load_setting(&mut data.open_in_ui, value),
        store: |data| store_setting(&data.open_in_ui),
    },
    FieldBinding {
        key: "auditOnOpening",
        load: |data, value| load_setting(&mut data.audit_on_opening, value),
        store: |data| store_setting(&data.audit_on_opening),
    },
    FieldBinding {
        key: "progressNumber",
        load: |data, value| load_setting(&mut data.progress_number, value),
        store: |data| store_setting(&data.progress_number),
    },
    FieldBinding {
        key: "progressMax",
        load: |data, value| load_setting(&mut data.progress_max, value),
        store: |data| store_setting(&data.progress_max),
    },
    FieldBinding {
        key: "associatedData",
        load: |data, value| load_setting(&mut data.associated_data, value),
        store: |data| store_setting(&data.associated_data),
    },
    FieldBinding {
        key: "taskScriptFilePath",
        load: |data, value| load_setting(&mut data.task_script_file_path, value),
        store: |data| store_setting(&data.task_script_file_path),
    },
    FieldBinding {
        key: "taskData",
        load: |data, value| load_setting(&mut data.task_data, value),
        store: |data| store_setting(&data.task_data),
    },
];

impl ScriptData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty record carrying a freshly generated session id
    pub fn with_new_session_id() -> Self {
        Self {
            session_id: Some(uuid::Uuid::new_v4().to_string()),
            ..Self::default()
        }
    }

    /// Recognized JSON keys, in the order they are stored
    pub fn keys() -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|field| field.key)
    }

    /// Apply every recognized key present in `object`.
    pub fn load(&mut self, object: &Map<String, Value>) {
        for field in FIELDS {
            if let Some(value) = object.get(field.key) {
                (field.load)(self, value);
            }
        }
    }

    /// Write every field under its key, unset fields as `null`.
    pub fn store(&self, object: &mut Map<String, Value>) {
        for field in FIELDS {
            object.insert(field.key.to_string(), (field.store)(self));
        }
    }

    pub fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        self.store(&mut object);
        Value::Object(object)
    }

    /// Build a record from a JSON node, which must be an object
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Malformed("script data must be a JSON object".to_string()))?;

        let mut data = Self::new();
        data.load(object);
        Ok(data)
    }

    /// Indented JSON text of the stored record
    pub fn to_json_string(&self) -> String {
        format!("{:#}", self.to_json_value())
    }

    pub fn from_json_string(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }
}

impl Serialize for ScriptData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScriptData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}
