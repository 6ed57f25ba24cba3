use thiserror::Error;

/// Errors produced by the whiteboard engine.
///
/// `EmptyUndoHistory`, `EmptyRedoHistory` and `SurfaceUnready` are reported by
/// the internal layers but the engine degrades them to logged no-ops, so an
/// interactive session never stops on them. Export failures are always
/// returned to the caller.
#[derive(Error, Debug)]
pub enum WhiteboardError {
    #[error("nothing to undo")]
    EmptyUndoHistory,
    #[error("nothing to redo")]
    EmptyRedoHistory,
    #[error("drawing surface is not bound")]
    SurfaceUnready,
    #[error("invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },
    #[error("undo expected shape {expected} at the end of the document, found {found:?}")]
    HistoryMismatch { expected: String, found: Option<String> },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unknown tool `{0}`")]
    UnknownTool(String),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("export failed: {0}")]
    ExportFailure(#[from] ExportError),
    #[error("failed to read config: {0}")]
    ConfigIo(#[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}


/// Reasons an export can fail
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),
    #[error("surface pixels do not form a {width}x{height} image")]
    Pixels { width: u32, height: u32 },
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export sink rejected the artifact: {0}")]
    Sink(String),
}

pub type WhiteboardResult<T> = Result<T, WhiteboardError>;
