mod button;
mod label;
mod row_list;

pub use button::Button;
pub use label::Label;
pub use row_list::{RowFactory, RowList, ROW_HEIGHT};

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::Rect;
use crate::scene::Scene;

/// Unique identifier for a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Shared handle to a type-erased view.
///
/// The tree is single-threaded; handles are cloned freely and borrowed at
/// the point of use.
pub type SharedView = Rc<RefCell<dyn View>>;

/// Wrap a view for insertion into the tree.
pub fn shared<V: View>(view: V) -> Rc<RefCell<V>> {
    Rc::new(RefCell::new(view))
}

/// Anything that can be attached to a [`Window`](crate::window::Window) and
/// painted into a [`Scene`].
///
/// Frames are absolute window coordinates. Containers position their
/// subviews in [`View::set_frame`] and paint them after their own chrome in
/// [`View::render`], so a parent's background sits underneath its children.
pub trait View: Any {
    /// Stable identity, used for attach and detach bookkeeping.
    fn id(&self) -> ViewId;

    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    /// Append this view's draw commands. Hidden views append nothing.
    fn render(&self, scene: &mut Scene);

    /// Direct children, front-most last.
    fn subviews(&self) -> Vec<SharedView> {
        Vec::new()
    }

    /// Hidden views are skipped by rendering and hit testing.
    fn is_hidden(&self) -> bool {
        false
    }

    fn set_hidden(&mut self, _hidden: bool) {}

    /// Concrete-type access for hooks that customize a specific view.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
