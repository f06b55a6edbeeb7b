use std::any::Any;

use crate::color::Color;
use crate::geometry::Rect;
use crate::scene::Scene;
use crate::text::{columns_for_width, truncate_to_width, TextAlign};
use crate::view::{View, ViewId};

/// A filled tap target with a centered title.
///
/// Buttons carry no press handler. Hosts hit test taps themselves and
/// decide what a press means.
#[derive(Debug)]
pub struct Button {
    id: ViewId,
    frame: Rect,
    title: String,
    background: Color,
    title_color: Color,
    hidden: bool,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::next(),
            frame: Rect::default(),
            title: title.into(),
            background: Color::WHITE,
            title_color: Color::BLUE,
            hidden: false,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl View for Button {
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
        scene.fill_rect(self.frame, self.background);
        let title = truncate_to_width(&self.title, columns_for_width(self.frame.width));
        scene.draw_text(self.frame, title, self.title_color, TextAlign::Center);
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
