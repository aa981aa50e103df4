use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an option from an unknown name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub kind: &'static str,
    pub name: String,
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.name)
    }
}

impl std::error::Error for UnknownOption {}

/// How the session drives Revit over its file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    /// Open each Revit file in turn and run the task script against it
    BatchRevitFileProcessing,
    /// Run the task script once, without opening any file
    SingleRevitTaskProcessing,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 2] = [
        ProcessingMode::BatchRevitFileProcessing,
        ProcessingMode::SingleRevitTaskProcessing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::BatchRevitFileProcessing => "BatchRevitFileProcessing",
            ProcessingMode::SingleRevitTaskProcessing => "SingleRevitTaskProcessing",
        }
    }
}

/// What to do when the file being opened is a workshared central model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CentralFileOpenMode {
    Detach,
    CreateNewLocal,
}

impl CentralFileOpenMode {
    pub const ALL: [CentralFileOpenMode; 2] =
        [CentralFileOpenMode::Detach, CentralFileOpenMode::CreateNewLocal];

    pub fn as_str(&self) -> &'static str {
        match self {
            CentralFileOpenMode::Detach => "Detach",
            CentralFileOpenMode::CreateNewLocal => "CreateNewLocal",
        }
    }
}

/// Which worksets are opened along with a workshared model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorksetConfiguration {
    CloseAllWorksets,
    OpenAllWorksets,
    OpenLastViewed,
}

impl WorksetConfiguration {
    pub const ALL: [WorksetConfiguration; 3] = [
        WorksetConfiguration::CloseAllWorksets,
        WorksetConfiguration::OpenAllWorksets,
        WorksetConfiguration::OpenLastViewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorksetConfiguration::CloseAllWorksets => "CloseAllWorksets",
            WorksetConfiguration::OpenAllWorksets => "OpenAllWorksets",
            WorksetConfiguration::OpenLastViewed => "OpenLastViewed",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CentralFileOpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WorksetConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "processing mode",
                name: s.to_string(),
            })
    }
}

impl FromStr for CentralFileOpenMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "central file open mode",
                name: s.to_string(),
            })
    }
}

impl FromStr for WorksetConfiguration {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|config| config.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "workset configuration",
                name: s.to_string(),
            })
    }
}
