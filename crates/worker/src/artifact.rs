//! Filesystem-backed artifact source.
//!
//! Production uploads land as files on disk; the worker reads one and
//! deletes it once the run has committed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use gradimport_core::store::{ArtifactError, ArtifactSource};

/// An uploaded CSV file on the local filesystem.
pub struct FileArtifact {
    path: PathBuf,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArtifactSource for FileArtifact {
    async fn read(&self) -> Result<Vec<u8>, ArtifactError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| ArtifactError::Read(format!("{}: {e}", self.path.display())))
    }

    async fn release(&self) -> Result<(), ArtifactError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            // Already gone counts as released; release is idempotent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ArtifactError::Release(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.csv");
        std::fs::write(&path, b"Nama,NRP,Status\n").unwrap();

        let artifact = FileArtifact::new(&path);
        assert_eq!(artifact.read().await.unwrap(), b"Nama,NRP,Status\n");
    }

    #[tokio::test]
    async fn read_of_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = FileArtifact::new(dir.path().join("absent.csv"));
        assert!(artifact.read().await.is_err());
    }

    #[tokio::test]
    async fn release_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.csv");
        std::fs::write(&path, b"data").unwrap();

        let artifact = FileArtifact::new(&path);
        artifact.release().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn release_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.csv");
        std::fs::write(&path, b"data").unwrap();

        let artifact = FileArtifact::new(&path);
        artifact.release().await.unwrap();
        artifact.release().await.unwrap();
    }
}
