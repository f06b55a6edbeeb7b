use std::any::Any;

use crate::color::Color;
use crate::geometry::Rect;
use crate::scene::Scene;
use crate::text::{columns_for_width, truncate_to_width, TextAlign};
use crate::view::{View, ViewId};

/// A single line of text, truncated with an ellipsis when it overflows its
/// frame.
#[derive(Debug)]
pub struct Label {
    id: ViewId,
    frame: Rect,
    text: String,
    color: Color,
    align: TextAlign,
    hidden: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ViewId::next(),
            frame: Rect::default(),
            text: text.into(),
            color: Color::BLACK,
            align: TextAlign::Left,
            hidden: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl View for Label {
    fn id(&self) -> ViewId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn render(&self, scene: &mut Scene) {
        if self.hidden {
            return;
        }
        let content = truncate_to_width(&self.text, columns_for_width(self.frame.width));
        scene.draw_text(self.frame, content, self.color, self.align);
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
