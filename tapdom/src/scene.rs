use crate::color::Color;
use crate::geometry::Rect;
use crate::text::TextAlign;

/// A single paint operation in window coordinates.
///
/// Earlier commands sit underneath later ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle with a solid color.
    Fill { rect: Rect, color: Color },
    /// Stroke a border just inside a rectangle's edges.
    Border { rect: Rect, color: Color, width: f32 },
    /// A single line of text laid out inside a rectangle.
    Text {
        rect: Rect,
        content: String,
        color: Color,
        align: TextAlign,
    },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::Fill { rect, .. }
            | DrawCommand::Border { rect, .. }
            | DrawCommand::Text { rect, .. } => *rect,
        }
    }
}

/// Display list produced by a render pass.
///
/// Views append commands in paint order; a backend rasterizes the list and
/// tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Degenerate rectangles are dropped rather than recorded.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    pub fn stroke_border(&mut self, rect: Rect, color: Color, width: f32) {
        if rect.is_empty() || width <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Border { rect, color, width });
    }

    pub fn draw_text(
        &mut self,
        rect: Rect,
        content: impl Into<String>,
        color: Color,
        align: TextAlign,
    ) {
        let content = content.into();
        if rect.is_empty() || content.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            rect,
            content,
            color,
            align,
        });
    }

    /// All text contents in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text contents whose rectangles lie entirely inside `area`, in paint
    /// order.
    pub fn texts_in(&self, area: Rect) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { rect, content, .. } if area.contains_rect(*rect) => {
                    Some(content.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Fill commands covering `area`, innermost last.
    pub fn fills_at(&self, area: Rect) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Fill { rect, color } if rect.contains_rect(area) => Some(*color),
                _ => None,
            })
            .collect()
    }
}
