use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;
use crate::surface::Surface;

/// A finished raster image ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Delivers an export to wherever the host saves downloads.
pub trait ExportSink {
    fn save(&mut self, artifact: ExportArtifact) -> Result<(), ExportError>;
}

/// Writes exports into a directory, replacing any earlier file of the same name.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileSink {
    fn save(&mut self, artifact: ExportArtifact) -> Result<(), ExportError> {
        let path = self.dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), artifact.bytes.len());
        Ok(())
    }
}

/// Keeps every export in memory; useful for hosts that stream the bytes
/// elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub artifacts: Vec<ExportArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ExportArtifact> {
        self.artifacts.last()
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, artifact: ExportArtifact) -> Result<(), ExportError> {
        self.artifacts.push(artifact);
        Ok(())
    }
}

/// Encode the surface as PNG.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (surface.width(), surface.height());
    let image = RgbaImage::from_raw(width, height, surface.to_rgba8())
        .ok_or(ExportError::Pixels { width, height })?;

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Serialize the surface into a downloadable artifact.
pub fn export_surface(surface: &Surface, file_name: &str) -> Result<ExportArtifact, ExportError> {
    Ok(ExportArtifact {
        file_name: file_name.to_owned(),
        mime_type: "image/png",
        bytes: encode_png(surface)?,
    })
}
