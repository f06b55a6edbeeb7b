use crate::geometry::Point;
use crate::view::{SharedView, ViewId};

/// Find the deepest visible view containing a point.
///
/// Children are walked in reverse order so the front-most subview wins.
/// Hidden views and their subtrees are skipped.
pub fn hit_test(view: &SharedView, point: Point) -> Option<ViewId> {
    let view = view.borrow();
    if view.is_hidden() || !view.frame().contains(point) {
        return None;
    }
    for child in view.subviews().iter().rev() {
        if let Some(id) = hit_test(child, point) {
            return Some(id);
        }
    }
    Some(view.id())
}
