//! secrets::file_store
//!
//! File-based secret storage in `~/.pullr/credentials.toml`.
//!
//! - On Unix the file is created with mode 0600
//! - Writes go to a sibling temp file that is renamed into place

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use super::traits::{SecretError, SecretStore};

/// File-based secret storage.
#[derive(Debug)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    /// Create a store at the default location, `~/.pullr/credentials.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SecretError> {
        let home = dirs::home_dir()
            .ok_or_else(|| SecretError::ReadError("cannot determine home directory".into()))?;
        Ok(Self::with_path(home.join(".pullr").join("credentials.toml")))
    }

    /// Create a store backed by a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SecretError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SecretError::ReadError(format!("cannot read credentials file: {}", e)))?;

        toml::from_str(&content).map_err(|_| {
            SecretError::ReadError(format!(
                "cannot parse credentials file {}",
                self.path.display()
            ))
        })
    }

    fn save(&self, secrets: &BTreeMap<String, String>) -> Result<(), SecretError> {
        let write_err = |what: &str, e: std::io::Error| {
            SecretError::WriteError(format!("cannot {}: {}", what, e))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err("create directory", e))?;
        }

        let content = toml::to_string(secrets)
            .map_err(|e| SecretError::WriteError(format!("cannot serialize credentials: {}", e)))?;

        let temp_path = self.path.with_extension("toml.tmp");
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        {
            let mut file = options
                .open(&temp_path)
                .map_err(|e| write_err("create temp file", e))?;

            // mode() only applies on creation; tighten a pre-existing temp file too
            #[cfg(unix)]
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| write_err("set permissions", e))?;

            file.write_all(content.as_bytes())
                .map_err(|e| write_err("write credentials", e))?;
            file.sync_all().map_err(|e| write_err("sync to disk", e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| write_err("rename temp file", e))
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        let mut secrets = self.load()?;
        secrets.insert(key.to_string(), value.to_string());
        self.save(&secrets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileSecretStore) {
        let temp = TempDir::new().expect("create temp dir");
        let store = FileSecretStore::with_path(temp.path().join("credentials.toml"));
        (temp, store)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_temp, store) = store();
        assert_eq!(store.get("forge.identity").unwrap(), None);
    }

    #[test]
    fn set_get_overwrite() {
        let (_temp, store) = store();

        store.set("forge.identity", "alice").unwrap();
        store.set("forge.identity", "bob").unwrap();
        store.set("forge.secret", "pa ss = \"word\"").unwrap();

        assert_eq!(store.get("forge.identity").unwrap().as_deref(), Some("bob"));
        assert_eq!(
            store.get("forge.secret").unwrap().as_deref(),
            Some("pa ss = \"word\"")
        );
    }

    #[test]
    fn creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("credentials.toml");
        let store = FileSecretStore::with_path(path.clone());

        store.set("k", "v").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn persists_across_instances() {
        let (temp, store) = store();
        store.set("forge.identity", "alice").unwrap();

        let reopened = FileSecretStore::with_path(temp.path().join("credentials.toml"));
        assert_eq!(
            reopened.get("forge.identity").unwrap().as_deref(),
            Some("alice")
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_is_owner_only() {
        let (_temp, store) = store();
        store.set("forge.secret", "x").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn corrupt_file_error_hides_contents() {
        let (_temp, store) = store();
        fs::write(store.path(), "forge.secret = [hunter2").unwrap();

        let err = store.get("forge.secret").unwrap_err().to_string();
        assert!(err.contains("cannot parse"));
        assert!(!err.contains("hunter2"));
    }
}
