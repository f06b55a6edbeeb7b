use tapdom::{Point, Rect, Size};

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_contains_inside_and_on_origin() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

    assert!(rect.contains(Point::new(10.0, 20.0)));
    assert!(rect.contains(Point::new(59.5, 45.0)));
}

#[test]
fn test_contains_right_and_bottom_edges_exclusive() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

    assert!(!rect.contains(Point::new(110.0, 30.0)));
    assert!(!rect.contains(Point::new(50.0, 70.0)));

    // Just inside both far edges
    assert!(rect.contains(Point::new(109.5, 69.5)));
}

#[test]
fn test_empty_rect_contains_nothing() {
    let rect = Rect::new(10.0, 10.0, 0.0, 44.0);

    assert!(rect.is_empty());
    assert!(!rect.contains(Point::new(10.0, 10.0)));
}

#[test]
fn test_contains_rect() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);

    assert!(outer.contains_rect(Rect::new(10.0, 10.0, 50.0, 50.0)));

    // Same frame counts as contained
    assert!(outer.contains_rect(outer));

    // Sticking out on the right
    assert!(!outer.contains_rect(Rect::new(60.0, 10.0, 50.0, 20.0)));
}

// ============================================================================
// Edges and Measures
// ============================================================================

#[test]
fn test_edge_accessors() {
    let rect = Rect::new(5.0, 7.0, 20.0, 10.0);

    assert_eq!(rect.left(), 5.0);
    assert_eq!(rect.right(), 25.0);
    assert_eq!(rect.top(), 7.0);
    assert_eq!(rect.bottom(), 17.0);
    assert_eq!(rect.center(), Point::new(15.0, 12.0));
}

#[test]
fn test_origin_and_size() {
    let rect = Rect::new(3.0, 4.0, 30.0, 40.0);

    assert_eq!(rect.origin(), Point::new(3.0, 4.0));
    assert_eq!(rect.size(), Size::new(30.0, 40.0));
}

#[test]
fn test_from_size_sits_at_origin() {
    let rect = Rect::from_size(320.0, 480.0);

    assert_eq!(rect.origin(), Point::new(0.0, 0.0));
    assert_eq!(rect.size(), Size::new(320.0, 480.0));
}

#[test]
fn test_size_is_empty() {
    assert!(Size::new(0.0, 10.0).is_empty());
    assert!(Size::new(10.0, -1.0).is_empty());
    assert!(!Size::new(1.0, 1.0).is_empty());
}

// ============================================================================
// Derived Rects
// ============================================================================

#[test]
fn test_translate() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    let moved = rect.translate(5.0, -10.0);

    assert_eq!(moved, Rect::new(15.0, 10.0, 30.0, 40.0));

    // Size is untouched
    assert_eq!(moved.size(), rect.size());
}

#[test]
fn test_inset() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);

    assert_eq!(
        rect.inset(5.0, 10.0, 5.0, 10.0),
        Rect::new(10.0, 5.0, 80.0, 40.0)
    );
}

#[test]
fn test_inset_clamps_to_empty() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let inset = rect.inset(20.0, 20.0, 20.0, 20.0);

    assert_eq!(inset.width, 0.0);
    assert_eq!(inset.height, 0.0);
    assert!(inset.is_empty());
}

// ============================================================================
// Intersection
// ============================================================================

#[test]
fn test_intersects_overlap() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let b = Rect::new(25.0, 25.0, 50.0, 50.0);

    assert!(a.intersects(b));
    assert!(b.intersects(a));
}

#[test]
fn test_intersects_touching_edges_do_not_count() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let below = Rect::new(0.0, 50.0, 50.0, 50.0);

    assert!(!a.intersects(below));
    assert!(!below.intersects(a));
}

#[test]
fn test_intersects_empty_never() {
    let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    let empty = Rect::new(10.0, 10.0, 0.0, 0.0);

    assert!(!a.intersects(empty));
    assert!(!empty.intersects(a));
}
