use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::{SessionError, SessionStore, SESSION_KEY};

/// Session storage backed by a JSON object on disk.
///
/// The file is a flat string-to-string map so other keys written by later
/// features survive a logout. Writes go through a temp file and a rename.
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_entries(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| SessionError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> Result<Option<String>, SessionError> {
        let mut entries = self.load_entries().await?;
        Ok(entries.remove(SESSION_KEY))
    }

    async fn write(&self, token: &str) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_entries().await?;
        entries.insert(SESSION_KEY.to_string(), token.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(&entries).map_err(|source| {
            SessionError::Corrupt {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), "session flag written");
        Ok(())
    }
}
