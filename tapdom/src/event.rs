use crate::geometry::Point;

/// High-level touch events in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A completed tap.
    Tap(Point),
    /// A scroll gesture over a point. Positive `delta_y` scrolls content
    /// toward later rows.
    Scroll { at: Point, delta_y: f32 },
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
