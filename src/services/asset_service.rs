//! AssetService — locates the single file served at `/` and opens it for
//! streaming. Nothing is cached: every request stats and opens the file so an
//! asset replaced on disk is picked up without a restart.

use crate::models::asset::Asset;
use chrono::{DateTime, Utc};
use std::{
    fs::Metadata,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;
use tokio::fs::{self, File};
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{}` not found", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AssetResult<T> = Result<T, AssetError>;

/// Shared handle to the served file. Cheap to clone; used as router state.
#[derive(Clone, Debug)]
pub struct AssetService {
    path: Arc<PathBuf>,
}

impl AssetService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stat the asset without opening it.
    pub async fn metadata(&self) -> AssetResult<Asset> {
        let meta = fs::metadata(self.path()).await.map_err(|err| self.map_io(err))?;
        self.describe(&meta)
    }

    /// Open the asset for reading.
    ///
    /// Metadata is taken from the opened handle so the reported length matches
    /// the bytes that will be streamed.
    pub async fn open(&self) -> AssetResult<(Asset, File)> {
        let file = File::open(self.path()).await.map_err(|err| self.map_io(err))?;
        let meta = file.metadata().await?;
        let asset = self.describe(&meta)?;
        debug!(path = %asset.path.display(), size = asset.size_bytes, "opened asset");
        Ok((asset, file))
    }

    fn describe(&self, meta: &Metadata) -> AssetResult<Asset> {
        // A directory at the asset path is treated as a missing file.
        if !meta.is_file() {
            return Err(AssetError::NotFound(self.path().to_path_buf()));
        }

        Ok(Asset {
            path: self.path().to_path_buf(),
            content_type: content_type_for(self.path()),
            size_bytes: meta.len(),
            last_modified: meta.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    fn map_io(&self, err: io::Error) -> AssetError {
        match err.kind() {
            // ENOTDIR and ENAMETOOLONG: no such file can exist at this path.
            ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidFilename => {
                AssetError::NotFound(self.path().to_path_buf())
            }
            _ => AssetError::Io(err),
        }
    }
}

/// Infer a MIME type from the file extension.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
