use egui::{Color32, Pos2, Rect, pos2, vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-left corner used for menu-placed shapes.
pub const DEFAULT_SHAPE_ORIGIN: Pos2 = pos2(100.0, 100.0);
/// Width and height used for menu-placed shapes.
pub const DEFAULT_SHAPE_SIZE: f32 = 100.0;

/// Stable identity of a committed shape, shared with remote peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Kinds that can be stamped from the shapes menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeStampKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeStampKind {
    pub const ALL: [ShapeStampKind; 3] = [Self::Rectangle, Self::Circle, Self::Triangle];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }

    /// Geometry of a freshly stamped shape of this kind.
    pub fn default_geometry(&self) -> ShapeKind {
        let size = vec2(DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE);
        match self {
            Self::Rectangle => ShapeKind::Rectangle {
                rect: Rect::from_min_size(DEFAULT_SHAPE_ORIGIN, size),
            },
            // The origin is the centre, the diameter is the default width.
            Self::Circle => ShapeKind::Circle {
                center: DEFAULT_SHAPE_ORIGIN,
                radius: DEFAULT_SHAPE_SIZE / 2.0,
            },
            Self::Triangle => ShapeKind::Triangle {
                rect: Rect::from_min_size(DEFAULT_SHAPE_ORIGIN, size),
            },
        }
    }
}

/// Geometry of a committed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// A finished freehand interaction. `path` is empty unless full-path
    /// capture is enabled.
    Freehand {
        origin: Pos2,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        path: Vec<Pos2>,
    },
    Rectangle { rect: Rect },
    Circle { center: Pos2, radius: f32 },
    /// Apex at the bottom centre of `rect`, base along its top edge.
    Triangle { rect: Rect },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freehand { .. } => "Freehand",
            Self::Rectangle { .. } => "Rectangle",
            Self::Circle { .. } => "Circle",
            Self::Triangle { .. } => "Triangle",
        }
    }

    /// The three corners of a triangle, in drawing order
    pub fn triangle_points(rect: Rect) -> [Pos2; 3] {
        [
            rect.min,
            pos2(rect.max.x, rect.min.y),
            pos2(rect.center().x, rect.max.y),
        ]
    }
}

/// An immutable, committed, renderable record in the drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    color: Color32,
    stroke_width: f32,
    kind: ShapeKind,
}

impl Shape {
    pub fn new(kind: ShapeKind, color: Color32, stroke_width: f32) -> Self {
        Self {
            id: ShapeId::new(),
            color,
            stroke_width,
            kind,
        }
    }

    /// A menu-stamped shape at the fixed default position and size.
    pub fn stamp(kind: ShapeStampKind, color: Color32, stroke_width: f32) -> Self {
        Self::new(kind.default_geometry(), color, stroke_width)
    }

    pub fn freehand(origin: Pos2, path: Vec<Pos2>, color: Color32, stroke_width: f32) -> Self {
        Self::new(ShapeKind::Freehand { origin, path }, color, stroke_width)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Bounding box including half the stroke width.
    pub fn bounds(&self) -> Rect {
        let rect = match &self.kind {
            ShapeKind::Freehand { origin, path } => {
                path.iter().fold(Rect::from_min_max(*origin, *origin), |rect, p| {
                    rect.union(Rect::from_min_max(*p, *p))
                })
            }
            ShapeKind::Rectangle { rect } | ShapeKind::Triangle { rect } => *rect,
            ShapeKind::Circle { center, radius } => {
                Rect::from_center_size(*center, vec2(radius * 2.0, radius * 2.0))
            }
        };
        rect.expand(self.stroke_width / 2.0)
    }
}
