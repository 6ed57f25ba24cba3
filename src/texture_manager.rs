use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::surface::Surface;

/// Keeps the drawing surface mirrored into a single egui texture.
///
/// The texture is re-uploaded only when the surface revision changes, so
/// frames without drawing activity cost nothing.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `surface`, uploading it if `revision` is new.
    pub fn texture_for(&mut self, ctx: &Context, surface: &Surface, revision: u64) -> TextureId {
        if self.uploaded_revision == Some(revision) {
            if let Some(handle) = &self.handle {
                return handle.id();
            }
        }

        let image = to_color_image(surface);
        match &mut self.handle {
            Some(handle) => handle.set(image, TextureOptions::NEAREST),
            None => {
                self.handle = Some(ctx.load_texture("whiteboard_surface", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_revision = Some(revision);
        self.uploads += 1;
        log::trace!("Uploaded surface revision {revision}");

        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }

    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}

pub fn to_color_image(surface: &Surface) -> ColorImage {
    let size = [surface.width() as usize, surface.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, &surface.to_rgba8())
}
