use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process map, lost on exit.
    #[default]
    Runtime,

    /// Item-pool cache over a directory of JSON files.
    Filesystem,

    /// Key-value cache held in memory.
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Filesystem => "filesystem",
            Self::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "runtime" => Ok(Self::Runtime),
            "filesystem" | "fs" => Ok(Self::Filesystem),
            "memory" => Ok(Self::Memory),
            _ => Err(format!(
                "unknown storage backend '{}', expected 'runtime', 'filesystem' or 'memory'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Cache directory for the filesystem backend.
    #[serde(default)]
    pub path: Option<String>,
}

impl StorageConfig {
    pub fn cache_dir(&self) -> PathBuf {
        self.path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("ferrous-doh"))
    }
}
