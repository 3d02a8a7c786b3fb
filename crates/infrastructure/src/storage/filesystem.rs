use super::pool::{CacheItem, CacheItemPool};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};
use ferrous_doh_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    key: String,
    expires_at: Option<DateTime<Utc>>,
    /// base64 of the item value
    value: String,
}

/// [`CacheItemPool`] over a directory, one JSON file per key.
#[derive(Debug, Clone)]
pub struct FilesystemPool {
    dir: PathBuf,
}

impl FilesystemPool {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to create cache directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn remove(&self, path: &Path) {
        if let Err(e) = std::fs::remove_file(path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "Failed to remove cache file");
            }
        }
    }
}

impl CacheItemPool for FilesystemPool {
    fn get_item(&self, key: &str) -> Result<CacheItem, DomainError> {
        let path = self.path_for(key);

        let contents = match std::fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CacheItem::miss(key)),
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let envelope: Envelope = match serde_json::from_slice(&contents) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt cache file");
                self.remove(&path);
                return Ok(CacheItem::miss(key));
            }
        };

        if envelope.key != key {
            return Ok(CacheItem::miss(key));
        }

        if envelope.expires_at.is_some_and(|at| Utc::now() >= at) {
            debug!(key = %key, "Cache file expired");
            self.remove(&path);
            return Ok(CacheItem::miss(key));
        }

        match STANDARD.decode(envelope.value.as_bytes()) {
            Ok(value) => Ok(CacheItem::hit(key, value)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt cache file");
                self.remove(&path);
                Ok(CacheItem::miss(key))
            }
        }
    }

    fn save(&self, item: CacheItem) -> Result<(), DomainError> {
        let path = self.path_for(item.key());
        let expires_at = item
            .ttl()
            .and_then(|ttl| TimeDelta::from_std(ttl).ok())
            .and_then(|ttl| Utc::now().checked_add_signed(ttl));
        let key = item.key().to_string();

        let Some(value) = item.into_value() else {
            self.remove(&path);
            return Ok(());
        };

        let envelope = Envelope {
            key,
            expires_at,
            value: STANDARD.encode(value),
        };
        let contents = serde_json::to_vec(&envelope)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize cache item: {}", e)))?;

        // One temp file per save, renamed over the key file.
        let write_err =
            |e: std::io::Error| DomainError::Storage(format!("Failed to write {}: {}", path.display(), e));
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(&contents).map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
