#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod stroke;
pub mod surface;
pub mod sync;
pub mod texture_manager;
pub mod tools;

pub use app::WhiteboardApp;
pub use command::{Command, CommandHistory};
pub use config::{FreehandCapture, RemoteHistoryPolicy, WhiteboardConfig};
pub use document::Document;
pub use engine::Whiteboard;
pub use error::{ExportError, WhiteboardError, WhiteboardResult};
pub use event::{ChangeOrigin, EngineEvent, EventHandler};
pub use export::{ExportArtifact, ExportSink, FileSink, MemorySink};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeId, ShapeKind, ShapeStampKind};
pub use surface::Surface;
pub use sync::RemoteChange;
pub use tools::{Tool, ToolKind};
