use crate::geometry::{Point, Rect};
use crate::hit;
use crate::scene::Scene;
use crate::view::{SharedView, ViewId};

/// Top-level surface that owns the attached view layers.
///
/// Layers stack in attach order; the last attached layer is on top. A
/// window doubles as the render root: [`Window::render`] paints every
/// visible layer bottom-up into a fresh [`Scene`].
///
/// Layer ids are captured at attach time, so detaching never borrows the
/// attached views. A layer may therefore detach a sibling (or itself) from
/// inside its own event handling.
pub struct Window {
    bounds: Rect,
    layers: Vec<(ViewId, SharedView)>,
}

impl Window {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
            layers: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Attach a view above all current layers.
    ///
    /// Re-attaching an already attached view moves it to the top instead of
    /// duplicating it.
    pub fn attach(&mut self, view: SharedView) {
        let id = view.borrow().id();
        self.layers.retain(|(existing, _)| *existing != id);
        self.layers.push((id, view));
        log::debug!("[window] attach {id}");
    }

    /// Detach the layer with the given id. Unknown ids are a no-op.
    pub fn detach(&mut self, id: ViewId) {
        let before = self.layers.len();
        self.layers.retain(|(existing, _)| *existing != id);
        if self.layers.len() != before {
            log::debug!("[window] detach {id}");
        }
    }

    pub fn is_attached(&self, id: ViewId) -> bool {
        self.layers.iter().any(|(existing, _)| *existing == id)
    }

    /// Deepest visible view under a point, scanning layers top-down.
    pub fn hit_test(&self, point: Point) -> Option<ViewId> {
        self.layers
            .iter()
            .rev()
            .find_map(|(_, layer)| hit::hit_test(layer, point))
    }

    /// Paint all layers bottom-up into a fresh scene.
    pub fn render(&self) -> Scene {
        let mut scene = Scene::new();
        for (_, layer) in &self.layers {
            layer.borrow().render(&mut scene);
        }
        scene
    }
}
