use tapdom::{
    hit_test, shared, Button, Color, DrawCommand, Label, Point, Rect, RowList, SharedView, View,
    Window,
};

fn button_at(title: &str, frame: Rect) -> SharedView {
    let button = shared(Button::new(title));
    button.borrow_mut().set_frame(frame);
    button
}

// ============================================================================
// Layer Management
// ============================================================================

#[test]
fn test_attach_stacks_layers() {
    let mut window = Window::new(320.0, 480.0);
    assert_eq!(window.bounds(), Rect::from_size(320.0, 480.0));
    assert_eq!(window.layer_count(), 0);

    let a = button_at("A", Rect::new(0.0, 0.0, 100.0, 44.0));
    let id_a = a.borrow().id();
    window.attach(a);

    assert_eq!(window.layer_count(), 1);
    assert!(window.is_attached(id_a));
}

#[test]
fn test_reattach_moves_layer_to_top() {
    let mut window = Window::new(320.0, 480.0);
    let overlap = Rect::new(0.0, 0.0, 100.0, 44.0);

    let a = button_at("A", overlap);
    let b = button_at("B", overlap);
    let id_a = a.borrow().id();
    let id_b = b.borrow().id();

    window.attach(a.clone());
    window.attach(b);
    assert_eq!(window.hit_test(Point::new(10.0, 10.0)), Some(id_b));

    // Re-attaching does not duplicate, it restacks
    window.attach(a);
    assert_eq!(window.layer_count(), 2);
    assert_eq!(window.hit_test(Point::new(10.0, 10.0)), Some(id_a));
}

#[test]
fn test_detach_removes_layer() {
    let mut window = Window::new(320.0, 480.0);
    let a = button_at("A", Rect::new(0.0, 0.0, 100.0, 44.0));
    let id_a = a.borrow().id();
    window.attach(a);

    window.detach(id_a);
    assert_eq!(window.layer_count(), 0);
    assert!(!window.is_attached(id_a));

    // Detaching an unknown id is a no-op
    window.detach(id_a);
    assert_eq!(window.layer_count(), 0);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_window_hit_test_top_layer_wins() {
    let mut window = Window::new(320.0, 480.0);
    let bottom = button_at("bottom", Rect::new(0.0, 0.0, 200.0, 200.0));
    let top = button_at("top", Rect::new(50.0, 50.0, 200.0, 200.0));
    let id_bottom = bottom.borrow().id();
    let id_top = top.borrow().id();

    window.attach(bottom);
    window.attach(top);

    // Overlapping region goes to the top layer
    assert_eq!(window.hit_test(Point::new(100.0, 100.0)), Some(id_top));

    // Region only the bottom layer covers
    assert_eq!(window.hit_test(Point::new(10.0, 10.0)), Some(id_bottom));

    // Nothing there
    assert_eq!(window.hit_test(Point::new(300.0, 400.0)), None);
}

#[test]
fn test_window_hit_test_skips_hidden_layers() {
    let mut window = Window::new(320.0, 480.0);
    let a = button_at("A", Rect::new(0.0, 0.0, 100.0, 44.0));
    a.borrow_mut().set_hidden(true);
    window.attach(a);

    assert_eq!(window.hit_test(Point::new(10.0, 10.0)), None);
}

#[test]
fn test_hit_test_finds_deepest_subview() {
    let mut rows = RowList::new();
    rows.register("row", Box::new(|| shared(Label::new(""))));
    rows.set_frame(Rect::new(0.0, 100.0, 200.0, 132.0));
    rows.reload("row", 3, |index, row| {
        if let Some(label) = row.as_any_mut().downcast_mut::<Label>() {
            label.set_text(format!("Row {index}"));
        }
    });
    let second_row = rows.rows()[1].borrow().id();

    let layer: SharedView = shared(rows);
    let hit = hit_test(&layer, Point::new(20.0, 150.0));

    assert_eq!(hit, Some(second_row));
}

#[test]
fn test_hit_test_falls_back_to_container() {
    let mut rows = RowList::new();
    rows.register("row", Box::new(|| shared(Label::new(""))));
    rows.set_frame(Rect::new(0.0, 0.0, 200.0, 220.0));
    rows.reload("row", 2, |_, _| {});
    let list_id = rows.id();

    let layer: SharedView = shared(rows);

    // Below the rows but still inside the list frame
    assert_eq!(hit_test(&layer, Point::new(10.0, 150.0)), Some(list_id));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_paints_layers_bottom_up() {
    let mut window = Window::new(320.0, 480.0);
    window.attach(button_at("first", Rect::new(0.0, 0.0, 100.0, 44.0)));
    window.attach(button_at("second", Rect::new(0.0, 0.0, 100.0, 44.0)));

    let scene = window.render();

    assert_eq!(scene.texts(), vec!["first", "second"]);
}

#[test]
fn test_render_skips_hidden_layers() {
    let mut window = Window::new(320.0, 480.0);
    let visible = button_at("visible", Rect::new(0.0, 0.0, 100.0, 44.0));
    let hidden = button_at("hidden", Rect::new(0.0, 100.0, 100.0, 44.0));
    hidden.borrow_mut().set_hidden(true);

    window.attach(visible);
    window.attach(hidden);

    let scene = window.render();
    assert_eq!(scene.texts(), vec!["visible"]);
}

#[test]
fn test_render_starts_from_a_fresh_scene() {
    let mut window = Window::new(320.0, 480.0);
    window.attach(button_at("A", Rect::new(0.0, 0.0, 100.0, 44.0)));

    let first = window.render();
    let second = window.render();

    assert_eq!(first.len(), second.len());
    assert!(matches!(
        second.commands()[0],
        DrawCommand::Fill {
            color: Color::WHITE,
            ..
        }
    ));
}
