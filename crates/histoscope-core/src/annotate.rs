use tracing::debug;

use crate::consts::MIN_SHAPE_EXTENT;
use crate::geom::Point;

pub type AnnotationId = u64;

/// The four placement tools. `Point` and `Text` place on click;
/// `Circle` and `Rectangle` place on press-drag-release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnotationTool {
    Point,
    Circle,
    Rectangle,
    Text,
}

/// Geometry of a committed annotation, relative to its origin.
/// Rectangle origin is the top-left corner; circle and point origins
/// are the center; text origin is the anchor of the label.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationShape {
    Point,
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    Text { content: String },
}

/// Fixed palette; an annotation captures the selected color at
/// creation time and is never retroactively recolored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnnotationColor {
    #[default]
    Red,
    Green,
    Blue,
    Amber,
    Violet,
    Pink,
}

impl AnnotationColor {
    pub const ALL: &[Self] = &[
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Amber,
        Self::Violet,
        Self::Pink,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Red => [0xef, 0x44, 0x44],
            Self::Green => [0x22, 0xc5, 0x5e],
            Self::Blue => [0x3b, 0x82, 0xf6],
            Self::Amber => [0xf5, 0x9e, 0x0b],
            Self::Violet => [0x8b, 0x5c, 0xf6],
            Self::Pink => [0xec, 0x48, 0x99],
        }
    }
}

/// A committed annotation in slide-space coordinates. Immutable after
/// creation except for deletion.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    pub origin: Point,
    pub shape: AnnotationShape,
    pub color: AnnotationColor,
}

/// In-progress circle/rectangle drag.
#[derive(Clone, Copy, Debug)]
struct DragState {
    tool: AnnotationTool,
    anchor: Point,
    current: Point,
}

impl DragState {
    /// Provisional origin and shape for the current pointer position.
    /// Rectangle extent is normalized so the origin is always the
    /// top-left corner regardless of drag direction.
    fn provisional(&self) -> (Point, AnnotationShape) {
        match self.tool {
            AnnotationTool::Circle => (
                self.anchor,
                AnnotationShape::Circle {
                    radius: self.anchor.distance_to(self.current),
                },
            ),
            _ => {
                let origin = Point::new(
                    self.anchor.x.min(self.current.x),
                    self.anchor.y.min(self.current.y),
                );
                (
                    origin,
                    AnnotationShape::Rectangle {
                        width: (self.current.x - self.anchor.x).abs(),
                        height: (self.current.y - self.anchor.y).abs(),
                    },
                )
            }
        }
    }
}

/// Placement state machine for free-form markup. Idle until a tool is
/// armed; an armed tool consumes pointer events until disarmed.
#[derive(Debug, Default)]
pub struct AnnotationState {
    tool: Option<AnnotationTool>,
    drag: Option<DragState>,
    pending_text: Option<Point>,
    annotations: Vec<Annotation>,
    visible: bool,
    color: AnnotationColor,
    next_id: AnnotationId,
}

impl AnnotationState {
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    pub fn active_tool(&self) -> Option<AnnotationTool> {
        self.tool
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn color(&self) -> AnnotationColor {
        self.color
    }

    pub fn set_color(&mut self, color: AnnotationColor) {
        self.color = color;
    }

    /// Arm a tool, or disarm by re-selecting the active tool (or
    /// passing `None`). Any in-progress drag or pending text placement
    /// is discarded on every transition.
    pub fn select_tool(&mut self, tool: Option<AnnotationTool>) {
        self.tool = if tool == self.tool { None } else { tool };
        self.drag = None;
        self.pending_text = None;
    }

    /// Pointer press in slide-space. Point annotations are created
    /// immediately; text records a pending placement awaiting input;
    /// circle/rectangle anchor a zero-extent provisional shape.
    pub fn pointer_press(&mut self, pos: Point) -> Option<AnnotationId> {
        match self.tool? {
            AnnotationTool::Point => Some(self.push(pos, AnnotationShape::Point)),
            AnnotationTool::Text => {
                self.pending_text = Some(pos);
                None
            }
            tool @ (AnnotationTool::Circle | AnnotationTool::Rectangle) => {
                self.drag = Some(DragState {
                    tool,
                    anchor: pos,
                    current: pos,
                });
                None
            }
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = pos;
        }
    }

    /// Release commits the provisional shape only if it exceeds the
    /// minimum extent; sub-threshold drags (effectively clicks) are
    /// silently discarded.
    pub fn pointer_release(&mut self) -> Option<AnnotationId> {
        let drag = self.drag.take()?;
        let (origin, shape) = drag.provisional();

        let committable = match &shape {
            AnnotationShape::Circle { radius } => *radius > MIN_SHAPE_EXTENT,
            AnnotationShape::Rectangle { width, height } => {
                *width > MIN_SHAPE_EXTENT || *height > MIN_SHAPE_EXTENT
            }
            _ => false,
        };

        if !committable {
            debug!("discarding sub-threshold drag");
            return None;
        }
        Some(self.push(origin, shape))
    }

    /// The uncommitted shape under the pointer, for rendering.
    pub fn in_progress(&self) -> Option<(Point, AnnotationShape)> {
        self.drag.map(|d| d.provisional())
    }

    /// Placement point awaiting text input, if any.
    pub fn pending_text(&self) -> Option<Point> {
        self.pending_text
    }

    /// Complete a pending text placement. Empty input creates nothing,
    /// matching the cancelled-prompt behavior.
    pub fn submit_text(&mut self, content: &str) -> Option<AnnotationId> {
        let pos = self.pending_text.take()?;
        if content.is_empty() {
            return None;
        }
        Some(self.push(
            pos,
            AnnotationShape::Text {
                content: content.to_string(),
            },
        ))
    }

    pub fn cancel_text(&mut self) {
        self.pending_text = None;
    }

    pub fn delete(&mut self, id: AnnotationId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        self.annotations.len() != before
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Rendering flag only: hidden annotations stay present and
    /// deletable.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    fn push(&mut self, origin: Point, shape: AnnotationShape) -> AnnotationId {
        self.next_id += 1;
        let id = self.next_id;
        self.annotations.push(Annotation {
            id,
            origin,
            shape,
            color: self.color,
        });
        id
    }
}
