use std::any::Any;
use std::collections::HashMap;

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::scene::Scene;
use crate::view::{SharedView, View, ViewId};

/// Default row height, in points.
pub const ROW_HEIGHT: f32 = 44.0;

/// Builds a fresh row view for a reuse identifier when the pool is empty.
pub type RowFactory = Box<dyn Fn() -> SharedView>;

/// A vertical list of fixed-height rows with a reuse pool.
///
/// Rows are built by factories registered under reuse identifiers. A
/// [`reload`](RowList::reload) drops the live row set back into the pool,
/// dequeues or builds rows for the new count, and hands each one to a
/// configure callback. Scrolling moves row frames; rows that leave the
/// list's own frame are skipped at paint time.
pub struct RowList {
    id: ViewId,
    frame: Rect,
    row_height: f32,
    background: Color,
    border: Option<(Color, f32)>,
    factories: HashMap<String, RowFactory>,
    pool: HashMap<String, Vec<SharedView>>,
    rows: Vec<(String, SharedView)>,
    scroll_offset: f32,
    hidden: bool,
}

impl RowList {
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            frame: Rect::default(),
            row_height: ROW_HEIGHT,
            background: Color::WHITE,
            border: None,
            factories: HashMap::new(),
            pool: HashMap::new(),
            rows: Vec::new(),
            scroll_offset: 0.0,
            hidden: false,
        }
    }

    pub fn row_height(mut self, height: f32) -> Self {
        if height > 0.0 {
            self.row_height = height;
        } else {
            log::warn!("[rows] ignoring non-positive row height {height}");
        }
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    /// Register the factory that builds rows for `identifier`.
    ///
    /// Re-registering replaces the factory and drops pooled rows built by
    /// the old one.
    pub fn register(&mut self, identifier: impl Into<String>, factory: RowFactory) {
        let identifier = identifier.into();
        if self.factories.insert(identifier.clone(), factory).is_some() {
            log::warn!("[rows] replacing row source for {identifier:?}");
            self.pool.remove(&identifier);
        }
    }

    /// Rebuild the live row set: `count` rows dequeued from `identifier`'s
    /// pool (or built by its factory), each handed to `configure` with its
    /// index after layout.
    ///
    /// An unregistered identifier logs a warning and leaves the list empty.
    /// The scroll offset is preserved and re-clamped to the new content.
    pub fn reload<F>(&mut self, identifier: &str, count: usize, mut configure: F)
    where
        F: FnMut(usize, &mut dyn View),
    {
        for (ident, row) in self.rows.drain(..) {
            self.pool.entry(ident).or_default().push(row);
        }

        match self.factories.get(identifier) {
            Some(factory) => {
                for _ in 0..count {
                    let row = self
                        .pool
                        .get_mut(identifier)
                        .and_then(|bucket| bucket.pop())
                        .unwrap_or_else(|| factory());
                    self.rows.push((identifier.to_string(), row));
                }
            }
            None if count > 0 => {
                log::warn!("[rows] no row source registered for {identifier:?}");
            }
            None => {}
        }

        self.clamp_scroll();
        self.layout_rows();
        for (index, (_, row)) in self.rows.iter().enumerate() {
            configure(index, &mut *row.borrow_mut());
        }
        log::debug!("[rows] reloaded {} rows for {identifier:?}", self.rows.len());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Live rows, top to bottom.
    pub fn rows(&self) -> Vec<SharedView> {
        self.rows.iter().map(|(_, row)| row.clone()).collect()
    }

    pub fn content_height(&self) -> f32 {
        self.rows.len() as f32 * self.row_height
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll so `offset` points of content sit above the top edge, clamped
    /// so the last row can land flush with the bottom edge.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.clamp_scroll();
        self.layout_rows();
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Row index under a window point, accounting for scroll. `None` when
    /// the point misses the list or lands past the last row.
    pub fn row_index_at(&self, point: Point) -> Option<usize> {
        if self.hidden || !self.frame.contains(point) {
            return None;
        }
        let content_y = point.y - self.frame.y + self.scroll_offset;
        let index = (content_y / self.row_height) as usize;
        if index < self.rows.len() {
            Some(index)
        } else {
            None
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.frame.height).max(0.0)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    fn layout_rows(&mut self) {
        for (index, (_, row)) in self.rows.iter().enumerate() {
            let y = self.frame.y + index as f32 * self.row_height - self.scroll_offset;
            row.borrow_mut()
                .set_frame(Rect::new(self.frame.x, y, self.frame.width, self.row_height));
        }
    }
}

impl Default for RowList {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RowList {
    fn id(&self) -> ViewId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.clamp_scroll();
        self.layout_rows();
    }

    fn render(&self, scene: &mut Scene) {
        if self.hidden {
            return;
        }
        scene.fill_rect(self.frame, self.background);
        for (_, row) in &self.rows {
            let row = row.borrow();
            if row.frame().intersects(self.frame) {
                row.render(scene);
            }
        }
        if let Some((color, width)) = self.border {
            scene.stroke_border(self.frame, color, width);
        }
    }

    fn subviews(&self) -> Vec<SharedView> {
        self.rows()
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
