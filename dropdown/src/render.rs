//! View plumbing for the dropdown header.
//!
//! Only the header renders through the widget itself. The overlay is a
//! window layer while open, painted by the window after everything under
//! it.

use std::any::Any;

use tapdom::{Rect, Scene, SharedView, View, ViewId};

use super::state::{Dropdown, HEADER_HEIGHT};

impl Dropdown {
    fn header(&self) -> SharedView {
        self.custom_header
            .clone()
            .unwrap_or_else(|| self.button.clone())
    }
}

impl View for Dropdown {
    fn id(&self) -> ViewId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        let header = Rect::new(frame.x, frame.y, frame.width, HEADER_HEIGHT);
        self.header().borrow_mut().set_frame(header);
    }

    fn render(&self, scene: &mut Scene) {
        if self.hidden {
            return;
        }
        self.header().borrow().render(scene);
    }

    fn subviews(&self) -> Vec<SharedView> {
        vec![self.header()]
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
