use std::path::PathBuf;

use crate::config::WhiteboardConfig;
use crate::engine::Whiteboard;
use crate::export::FileSink;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::texture_manager::TextureManager;

/// Desktop host for one whiteboard session.
pub struct WhiteboardApp {
    whiteboard: Whiteboard,
    input_handler: InputHandler,
    texture_manager: TextureManager,
    export_dir: PathBuf,
    status: Option<String>,
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WhiteboardConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: WhiteboardConfig) -> Self {
        let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            whiteboard: Whiteboard::new(config),
            input_handler: InputHandler::new(),
            texture_manager: TextureManager::new(),
            export_dir,
            status: None,
        }
    }

    pub fn whiteboard(&self) -> &Whiteboard {
        &self.whiteboard
    }

    pub fn whiteboard_mut(&mut self) -> &mut Whiteboard {
        &mut self.whiteboard
    }

    /// Split borrow used by the canvas while painting.
    pub(crate) fn canvas_parts(&mut self) -> (&mut Whiteboard, &mut InputHandler, &mut TextureManager) {
        (&mut self.whiteboard, &mut self.input_handler, &mut self.texture_manager)
    }

    /// Save the surface as a PNG in the export directory.
    pub fn download(&mut self) {
        let mut sink = FileSink::new(&self.export_dir);
        self.status = match self.whiteboard.export(&mut sink) {
            Ok(()) => Some(format!(
                "Saved {}",
                sink.dir().join(&self.whiteboard.config().export_file_name).display()
            )),
            Err(err) => Some(format!("Download failed: {err}")),
        };
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

impl eframe::App for WhiteboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
