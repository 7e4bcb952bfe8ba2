//! On-disk store for uploaded content assets (images, icons, banners).
//!
//! Every stored file gets a fresh UUID v4 name; only the extension of the
//! uploaded file name survives. Rows keep the public reference
//! (`/uploads/<name>`), which is also the URL the static file route serves.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::CoreError;

/// URL prefix under which the store root is served read-only.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Outcome of deleting a stored asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    NotFound,
}

/// File-backed asset store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding every stored asset.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist `bytes` under a freshly generated name and return its reference.
    ///
    /// The root directory is created on first use.
    pub async fn save(&self, bytes: &[u8], original_name: &str) -> Result<String, CoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to create upload directory: {e}")))?;

        let file_name = stored_file_name(original_name);
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to upload image: {e}")))?;

        let reference = format!("{PUBLIC_PREFIX}/{file_name}");
        tracing::debug!(%reference, size = bytes.len(), "Stored asset");
        Ok(reference)
    }

    /// Map a reference to its file inside the root.
    ///
    /// Only the final path component is used, so a crafted reference can
    /// never point outside the root.
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let name = Path::new(reference).file_name()?.to_str()?;
        Some(self.root.join(name))
    }

    /// Remove the file behind `reference`.
    pub async fn delete(&self, reference: &str) -> Result<Removal, CoreError> {
        let Some(path) = self.resolve(reference) else {
            return Ok(Removal::NotFound);
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(Removal::Deleted),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Removal::NotFound),
            Err(e) => Err(CoreError::Storage(format!(
                "Failed to delete {}: {e}",
                path.display()
            ))),
        }
    }

    /// Best-effort delete: failures are logged and swallowed.
    ///
    /// Empty references (rows without an asset) are ignored.
    pub async fn release(&self, reference: &str) {
        if reference.is_empty() {
            return;
        }

        match self.delete(reference).await {
            Ok(Removal::Deleted) => tracing::debug!(%reference, "Released asset"),
            Ok(Removal::NotFound) => {
                tracing::warn!(%reference, "Asset already missing when releasing")
            }
            Err(e) => tracing::warn!(%reference, error = %e, "Failed to release asset"),
        }
    }
}

/// `<uuid>.<ext>` when the original name has a plain alphanumeric extension,
/// bare `<uuid>` otherwise.
fn stored_file_name(original_name: &str) -> String {
    let id = Uuid::new_v4();
    match extension_of(original_name) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

fn extension_of(original_name: &str) -> Option<String> {
    let ext = Path::new(original_name).extension()?.to_str()?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> AssetStore {
        AssetStore::new(dir.path().join("uploads"))
    }

    #[tokio::test]
    async fn save_creates_root_and_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.root().exists());

        let reference = store.save(b"png-bytes", "logo.PNG").await.unwrap();

        assert!(reference.starts_with("/uploads/"));
        assert!(reference.ends_with(".png"));
        let path = store.resolve(&reference).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn names_are_independent_of_the_original() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let a = store.save(b"a", "same.jpg").await.unwrap();
        let b = store.save(b"b", "same.jpg").await.unwrap();

        assert_ne!(a, b);
        assert!(!a.contains("same"));
    }

    #[tokio::test]
    async fn delete_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let reference = store.save(b"x", "icon.svg").await.unwrap();

        assert_matches!(store.delete(&reference).await, Ok(Removal::Deleted));
        assert_matches!(store.delete(&reference).await, Ok(Removal::NotFound));
    }

    #[tokio::test]
    async fn release_ignores_empty_and_missing_references() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.release("").await;
        store.release("/uploads/does-not-exist.png").await;
    }

    #[test]
    fn resolve_stays_inside_root() {
        let store = AssetStore::new("/srv/uploads");

        assert_eq!(
            store.resolve("/uploads/../../etc/passwd"),
            Some(PathBuf::from("/srv/uploads/passwd"))
        );
        assert_eq!(store.resolve("/uploads/.."), None);
    }

    #[test]
    fn extension_is_kept_only_when_plain() {
        assert_eq!(extension_of("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of("weird.p$p"), None);
    }
}
