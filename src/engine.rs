use egui::{Color32, Pos2};

use crate::command::{Command, CommandHistory};
use crate::config::{RemoteHistoryPolicy, WhiteboardConfig};
use crate::document::Document;
use crate::error::{WhiteboardError, WhiteboardResult};
use crate::event::{ChangeOrigin, EngineEvent, EventBus, EventHandler};
use crate::export::{self, ExportSink};
use crate::palette;
use crate::renderer::Renderer;
use crate::shape::{Shape, ShapeStampKind};
use crate::surface::Surface;
use crate::sync::RemoteChange;
use crate::tools::{LiveMark, Tool, ToolKind, ToolResponse, ToolSettings, ToolType};

/// One whiteboard session.
///
/// The engine exclusively owns the document, its history, the tool state and
/// the surface. Every document mutation (commit, undo, redo, clear, remote
/// change) ends with a full redraw; eraser and live freehand marks go straight
/// to the surface and are therefore lost on the next redraw.
///
/// Until a surface is bound, document operations still apply and their redraw
/// is deferred to [`Whiteboard::bind_surface`]; pointer input is dropped.
#[derive(Debug)]
pub struct Whiteboard {
    config: WhiteboardConfig,
    document: Document,
    history: CommandHistory,
    tool: ToolType,
    settings: ToolSettings,
    surface: Option<Surface>,
    renderer: Renderer,
    events: EventBus,
    redraw_pending: bool,
    surface_revision: u64,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new(WhiteboardConfig::default())
    }
}

impl Whiteboard {
    /// Create an engine with no surface bound yet.
    pub fn new(config: WhiteboardConfig) -> Self {
        Self {
            settings: ToolSettings::from_config(&config),
            renderer: Renderer::new(config.background),
            config,
            document: Document::new(),
            history: CommandHistory::new(),
            tool: ToolType::default(),
            surface: None,
            events: EventBus::new(),
            redraw_pending: false,
            surface_revision: 0,
        }
    }

    /// Create an engine bound to a surface of the configured size.
    pub fn with_surface(config: WhiteboardConfig) -> WhiteboardResult<Self> {
        let (width, height) = (config.surface_width, config.surface_height);
        let mut whiteboard = Self::new(config);
        whiteboard.bind_surface(width, height)?;
        Ok(whiteboard)
    }

    // --- Surface -----------------------------------------------------------

    /// Bind (or resize) the drawing surface and redraw the document onto it.
    ///
    /// Binding the size that is already bound keeps the current pixels.
    pub fn bind_surface(&mut self, width: u32, height: u32) -> WhiteboardResult<()> {
        if let Some(surface) = &self.surface {
            if surface.width() == width && surface.height() == height {
                return Ok(());
            }
        }
        self.surface = Some(Surface::new(width, height)?);
        log::info!("Bound {width}x{height} drawing surface");
        self.redraw();
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Redraw the whole surface from the document.
    pub fn redraw(&mut self) {
        match &mut self.surface {
            Some(surface) => {
                self.renderer.render(&self.document, surface);
                self.redraw_pending = false;
                self.surface_revision += 1;
            }
            None => {
                log::debug!("Redraw deferred: {}", WhiteboardError::SurfaceUnready);
                self.redraw_pending = true;
            }
        }
    }

    /// True when a redraw was requested before a surface was bound.
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Changes whenever the surface pixels may have changed.
    pub fn surface_revision(&self) -> u64 {
        self.surface_revision
    }

    pub fn render_count(&self) -> u64 {
        self.renderer.render_count()
    }

    // --- Tool state --------------------------------------------------------

    /// Switch tools. Any interaction in progress is abandoned. Selecting a
    /// shape stamp commits its default shape right away.
    pub fn select_tool(&mut self, kind: ToolKind) {
        self.cancel_interaction();
        self.tool = ToolType::from_kind(kind);
        log::debug!("Selected tool {}", kind.name());

        if let ToolType::ShapeStamp(stamp) = &self.tool {
            let command = stamp.stamp(&self.settings);
            self.commit_command(command, ChangeOrigin::Local);
        }
    }

    /// Select a tool by its toolbar id (`pencil`, `eraser`, `rectangle`, ...).
    pub fn select_tool_by_id(&mut self, id: &str) -> WhiteboardResult<()> {
        let kind = id.parse()?;
        self.select_tool(kind);
        Ok(())
    }

    pub fn tool(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn select_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    /// Select a color given as `#rrggbb` or `#rrggbbaa`.
    pub fn select_color_hex(&mut self, hex: &str) -> WhiteboardResult<()> {
        self.select_color(palette::parse_hex_color(hex)?);
        Ok(())
    }

    pub fn color(&self) -> Color32 {
        self.settings.color
    }

    /// Set the width for future shapes, clamped to the configured range.
    pub fn select_stroke_width(&mut self, width: f32) {
        if !width.is_finite() {
            log::warn!("Ignoring stroke width {width}");
            return;
        }
        self.settings.stroke_width = self.config.clamp_stroke_width(width);
    }

    pub fn stroke_width(&self) -> f32 {
        self.settings.stroke_width
    }

    pub fn is_drawing(&self) -> bool {
        self.tool.is_drawing()
    }

    // --- Pointer input -----------------------------------------------------

    pub fn pointer_down(&mut self, pos: Pos2) {
        if !self.accepts_input("pointer down") {
            return;
        }
        let response = self.tool.on_pointer_down(pos, &self.settings);
        self.apply_response(response);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.accepts_input("pointer move") {
            return;
        }
        let response = self.tool.on_pointer_move(pos, &self.settings);
        self.apply_response(response);
    }

    pub fn pointer_up(&mut self) {
        if !self.accepts_input("pointer up") {
            return;
        }
        let response = self.tool.on_pointer_up(&self.settings);
        self.apply_response(response);
    }

    /// The pointer left the surface without a release.
    pub fn pointer_leave(&mut self) {
        self.cancel_interaction();
    }

    /// Abandon the current interaction. A half-built freehand stroke is
    /// discarded without a commit; pixels it already drew stay until the
    /// next redraw.
    pub fn cancel_interaction(&mut self) -> bool {
        let cancelled = self.tool.cancel();
        if cancelled {
            log::debug!("Cancelled {} interaction", self.tool.name());
        }
        cancelled
    }

    fn accepts_input(&self, what: &str) -> bool {
        if self.surface.is_none() {
            log::debug!("Dropped {what}: {}", WhiteboardError::SurfaceUnready);
            return false;
        }
        true
    }

    fn apply_response(&mut self, response: ToolResponse) {
        if let (Some(mark), Some(surface)) = (response.mark, &mut self.surface) {
            match mark {
                LiveMark::Segment(segment) => surface.draw_segment(&segment),
                LiveMark::Erase(region) => surface.clear_rect(region),
            }
            self.surface_revision += 1;
        }
        if let Some(command) = response.command {
            self.commit_command(command, ChangeOrigin::Local);
        }
    }

    // --- Document and history ----------------------------------------------

    /// Commit a shape: append it, record it, drop the redo stack, redraw.
    pub fn commit(&mut self, shape: Shape) {
        self.commit_command(Command::AddShape(shape), ChangeOrigin::Local);
    }

    /// Commit the default-placed shape of `kind` without changing the tool.
    pub fn add_shape(&mut self, kind: ShapeStampKind) {
        let shape = Shape::stamp(kind, self.settings.color, self.settings.stroke_width);
        self.commit(shape);
    }

    fn commit_command(&mut self, command: Command, origin: ChangeOrigin) {
        let shape = command.shape().clone();
        log::debug!("Commit {} {}", shape.kind().name(), shape.id());
        self.history.execute(command, &mut self.document);
        self.events.emit(EngineEvent::ShapeCommitted { shape, origin });
        self.redraw();
    }

    /// Undo the last commit. Returns false (and changes nothing) when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.document) {
            Ok(command) => {
                self.events.emit(EngineEvent::Undone {
                    shape: command.shape().clone(),
                });
                self.redraw();
                true
            }
            Err(WhiteboardError::EmptyUndoHistory) => {
                log::debug!("Undo skipped: {}", WhiteboardError::EmptyUndoHistory);
                false
            }
            Err(err) => {
                log::error!("Undo failed: {err}");
                false
            }
        }
    }

    /// Redo the last undone commit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.document) {
            Ok(command) => {
                self.events.emit(EngineEvent::Redone {
                    shape: command.shape().clone(),
                });
                self.redraw();
                true
            }
            Err(err) => {
                log::debug!("Redo skipped: {err}");
                false
            }
        }
    }

    /// Empty the document and both history stacks and reset tool, color and
    /// stroke width to their configured defaults.
    pub fn clear(&mut self) {
        self.cancel_interaction();
        self.document.clear();
        self.history.clear();
        self.tool = ToolType::default();
        self.settings = ToolSettings::from_config(&self.config);
        self.events.emit(EngineEvent::Cleared {
            origin: ChangeOrigin::Local,
        });
        self.redraw();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    // --- Collaboration -----------------------------------------------------

    /// Register an observer for every commit, undo, redo and clear.
    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.events.subscribe(Box::new(handler));
    }

    /// Apply a change produced by another peer.
    ///
    /// Inserts follow [`RemoteHistoryPolicy`]: with `Barrier` the shape is not
    /// recorded and both local stacks are cleared, so local undo never reaches
    /// past a remote edit; with `Shared` it is recorded like a local commit.
    /// A remote clear empties document and history but keeps local tool state.
    ///
    /// An insert whose shape id is already in the document is ignored, so a
    /// peer's redo of a shape we already hold does not duplicate it.
    pub fn apply_remote(&mut self, change: RemoteChange) {
        match change {
            RemoteChange::Insert { shape } if self.document.contains(shape.id()) => {
                log::debug!("Remote insert {} already applied", shape.id());
            }
            RemoteChange::Insert { shape } => match self.config.remote_history {
                RemoteHistoryPolicy::Shared => {
                    self.commit_command(Command::AddShape(shape), ChangeOrigin::Remote);
                }
                RemoteHistoryPolicy::Barrier => {
                    log::debug!("Remote insert {} seals local history", shape.id());
                    self.document.push(shape.clone());
                    self.history.clear();
                    self.events.emit(EngineEvent::ShapeCommitted {
                        shape,
                        origin: ChangeOrigin::Remote,
                    });
                    self.redraw();
                }
            },
            RemoteChange::Clear => {
                self.document.clear();
                self.history.clear();
                self.events.emit(EngineEvent::Cleared {
                    origin: ChangeOrigin::Remote,
                });
                self.redraw();
            }
        }
    }

    // --- Export ------------------------------------------------------------

    /// Encode the current surface as `drawing.png` and hand it to `sink`.
    pub fn export(&self, sink: &mut dyn ExportSink) -> WhiteboardResult<()> {
        let surface = self.surface.as_ref().ok_or_else(|| {
            log::error!("Export failed: {}", WhiteboardError::SurfaceUnready);
            WhiteboardError::SurfaceUnready
        })?;

        export::export_surface(surface, &self.config.export_file_name)
            .and_then(|artifact| sink.save(artifact))
            .map_err(|err| {
                log::error!("Export failed: {err}");
                WhiteboardError::from(err)
            })
    }
}
