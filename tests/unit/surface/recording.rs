use super::*;

#[test]
fn add_and_remove_track_stack() {
    let mut s = RecordingSurface::new();
    let a = s.add_drawable("a", &Transform::default());
    let b = s.add_drawable("b", &Transform::default());
    assert_eq!(s.stack(), &[a, b]);
    s.remove_drawable(a);
    assert_eq!(s.stack(), &[b]);
    assert!(s.drawable(a).is_none());
}

#[test]
fn reorder_applies_listed_order() {
    let mut s = RecordingSurface::new();
    let a = s.add_drawable("a", &Transform::default());
    let b = s.add_drawable("b", &Transform::default());
    let c = s.add_drawable("c", &Transform::default());
    s.reorder(&[c, a, b]);
    assert_eq!(s.stacked_images(), vec!["c", "a", "b"]);
    // Unlisted handles stay underneath.
    s.reorder(&[a, SurfaceHandle(99)]);
    assert_eq!(s.stacked_images(), vec!["c", "b", "a"]);
}

#[test]
fn flags_and_render_are_recorded() {
    let mut s = RecordingSurface::new();
    let a = s.add_drawable("a", &Transform::default());
    s.set_interactive(a, false);
    s.set_visible(a, false);
    s.render();
    let d = s.drawable(a).unwrap();
    assert!(!d.interactive);
    assert!(!d.visible);
    assert_eq!(s.render_count(), 1);
    assert_eq!(s.calls().last(), Some(&SurfaceCall::Render));
    s.clear_calls();
    assert!(s.calls().is_empty());
}
