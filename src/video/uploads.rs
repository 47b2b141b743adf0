//! Upload list and lazily decoded compositor inputs.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::{PreparedImage, decode_image};
use crate::foundation::error::{StudioError, StudioResult};

/// One source image handed to the compositor, either still encoded or already drawable.
#[derive(Clone, Debug)]
pub enum PendingImage {
    /// Already decoded.
    Ready(PreparedImage),
    /// Encoded file bytes, decoded on demand.
    Encoded(Arc<Vec<u8>>),
}

impl PendingImage {
    /// Resolve to a drawable raster. Decoding runs on the blocking pool; `index` only
    /// labels errors.
    ///
    /// Images the rasterizer cannot sample are reported as [`StudioError::DecodeFailure`] too.
    pub async fn decode(self, index: usize) -> StudioResult<PreparedImage> {
        let image = match self {
            Self::Ready(image) => image,
            Self::Encoded(bytes) => tokio::task::spawn_blocking(move || decode_image(&bytes))
                .await
                .map_err(|e| StudioError::decode(index, format!("decode task failed: {e}")))?
                .map_err(|e| StudioError::decode(index, format!("{e:#}")))?,
        };
        image
            .check_raster_limits()
            .map_err(|e| StudioError::decode(index, e.to_string()))?;
        Ok(image)
    }
}

impl From<PreparedImage> for PendingImage {
    fn from(image: PreparedImage) -> Self {
        Self::Ready(image)
    }
}

impl From<Vec<u8>> for PendingImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Encoded(Arc::new(bytes))
    }
}

/// A named, still-encoded image.
#[derive(Clone, Debug)]
pub struct Upload {
    /// Original file name.
    pub name: String,
    /// Encoded file contents.
    pub bytes: Arc<Vec<u8>>,
}

/// Ordered list of uploaded, still-encoded images.
#[derive(Clone, Debug, Default)]
pub struct UploadedImages {
    items: Vec<Upload>,
}

impl UploadedImages {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one upload at the end.
    pub fn push(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.items.push(Upload {
            name: name.into(),
            bytes: Arc::new(bytes),
        });
    }

    /// Append a batch, keeping its order.
    pub fn extend<I, N>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (N, Vec<u8>)>,
        N: Into<String>,
    {
        for (name, bytes) in batch {
            self.push(name, bytes);
        }
    }

    /// Read files in the given order and append them.
    pub async fn extend_from_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> StudioResult<()> {
        for path in paths {
            let path = path.as_ref();
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("read image '{}'", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.push(name, bytes);
        }
        Ok(())
    }

    /// Remove by position; out-of-range indices return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Upload> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Number of uploads.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is uploaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Uploads in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &Upload> + '_ {
        self.items.iter()
    }

    /// Compositor input, in upload order.
    pub fn pending(&self) -> Vec<PendingImage> {
        self.items
            .iter()
            .map(|u| PendingImage::Encoded(Arc::clone(&u.bytes)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/video/uploads.rs"]
mod tests;
