//! Event handling and overlay lifecycle for the dropdown.

use tapdom::{Event, EventResult, Point, Rect, View, Window, ROW_HEIGHT};

use super::state::{Dropdown, MAX_VISIBLE_ROWS};

impl Dropdown {
    /// Offer an event to the dropdown.
    ///
    /// A tap on the header toggles the overlay. While open, a tap on a row
    /// selects it and closes the overlay, any other tap inside the overlay
    /// is swallowed, and scrolls over the overlay move its rows. Everything
    /// else is ignored so the host can route it elsewhere.
    pub fn handle_event(&mut self, event: &Event, window: &mut Window) -> EventResult {
        match *event {
            Event::Tap(point) => self.handle_tap(point, window),
            Event::Scroll { at, delta_y } => self.handle_scroll(at, delta_y),
        }
    }

    /// Flip between closed and open.
    pub fn toggle(&mut self, window: &mut Window) {
        self.is_open = !self.is_open;
        if self.is_open {
            self.open(window);
        } else {
            self.close(window);
        }
    }

    /// Close if open and detach the overlay from the window.
    ///
    /// Hosts call this before dropping a dropdown so no orphaned overlay
    /// layer stays behind.
    pub fn dismiss(&mut self, window: &mut Window) {
        self.is_open = false;
        window.detach(self.overlay_id());
    }

    /// Frame the overlay would occupy: directly under the widget frame,
    /// same width, with the configured height or one row per option capped
    /// at [`MAX_VISIBLE_ROWS`].
    pub fn overlay_frame(&self) -> Rect {
        let height = self.overlay_height.unwrap_or_else(|| {
            self.options.len().min(MAX_VISIBLE_ROWS) as f32 * ROW_HEIGHT
        });
        Rect::new(
            self.frame.x,
            self.frame.y + self.frame.height,
            self.frame.width,
            height,
        )
    }

    fn handle_tap(&mut self, point: Point, window: &mut Window) -> EventResult {
        if self.header_frame().contains(point) {
            self.toggle(window);
            return EventResult::Consumed;
        }

        if !self.is_open {
            return EventResult::Ignored;
        }

        let (row, inside_overlay) = {
            let rows = self.row_list.borrow();
            (rows.row_index_at(point), rows.frame().contains(point))
        };
        if let Some(index) = row {
            self.apply_selection(index);
            self.toggle(window);
            return EventResult::Consumed;
        }
        if inside_overlay {
            // Tap on overlay chrome past the last row: swallow, stay open.
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    fn handle_scroll(&mut self, at: Point, delta_y: f32) -> EventResult {
        if !self.is_open {
            return EventResult::Ignored;
        }
        let mut rows = self.row_list.borrow_mut();
        if !rows.frame().contains(at) {
            return EventResult::Ignored;
        }
        rows.scroll_by(delta_y);
        EventResult::Consumed
    }

    fn open(&mut self, window: &mut Window) {
        let overlay = self.overlay_frame();
        log::debug!("[dropdown] open at {overlay:?}");
        self.row_list.borrow_mut().set_frame(overlay);
        window.attach(self.row_list.clone());
        self.row_list.borrow_mut().set_hidden(false);
        self.reload_rows();
    }

    fn close(&mut self, window: &mut Window) {
        log::debug!("[dropdown] close");
        window.detach(self.overlay_id());
    }
}
