use crate::error::{MonitorError, Result};
use crate::storage::SeenStore;
use crate::types::PostId;
use log::{debug, info};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Seen set persisted as a pretty-printed JSON array of id strings.
pub struct JsonSeenStore {
    path: PathBuf,
}

impl JsonSeenStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "seen.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SeenStore for JsonSeenStore {
    fn load(&self) -> Result<BTreeSet<PostId>> {
        if !self.path.exists() {
            debug!("No seen store at {}, starting empty", self.path.display());
            return Ok(BTreeSet::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| MonitorError::io(&self.path, e))?;
        let ids: Vec<PostId> = serde_json::from_str(&content)?;
        let seen: BTreeSet<PostId> = ids.into_iter().collect();

        info!("Loaded {} seen ids from {}", seen.len(), self.path.display());
        Ok(seen)
    }

    fn save(&self, seen: &BTreeSet<PostId>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| MonitorError::io(parent, e))?;
            }
        }

        // BTreeSet iterates ascending, so the file diffs cleanly between runs
        let ids: Vec<&PostId> = seen.iter().collect();
        let mut json = serde_json::to_string_pretty(&ids)?;
        json.push('\n');

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).map_err(|e| MonitorError::io(&temp_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| MonitorError::io(&temp_path, e))?;
        file.flush().map_err(|e| MonitorError::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| MonitorError::io(&self.path, e))?;

        debug!("Saved {} seen ids to {}", seen.len(), self.path.display());
        Ok(())
    }
}
