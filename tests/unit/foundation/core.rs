use super::*;

#[test]
fn default_canvas_center_matches_placement_default() {
    let c = Canvas::default();
    assert_eq!(c.center(), Point::new(250.0, 300.0));
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn rotation_is_folded_into_range() {
    assert_eq!(normalize_degrees(0.0), 0.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(725.0), 5.0);
    assert_eq!(normalize_degrees(f64::NAN), 0.0);
    let t = Transform {
        rotation_deg: -45.0,
        ..Transform::default()
    }
    .normalized();
    assert_eq!(t.rotation_deg, 315.0);
}

#[test]
fn placement_expands_to_uniform_scale() {
    let t = Placement::new(10.0, 20.0, 0.5).to_transform();
    assert_eq!(t.position, Point::new(10.0, 20.0));
    assert_eq!(t.scale, Vec2::new(0.5, 0.5));
    assert_eq!(t.rotation_deg, 0.0);
}

#[test]
fn zindex_orders_fractional_bands() {
    assert!(ZIndex(3.0) < ZIndex(3.5));
    assert_eq!(ZIndex(3.5).total_cmp(ZIndex(4.0)), std::cmp::Ordering::Less);
    assert_eq!(serde_json::to_string(&ZIndex(3.5)).unwrap(), "3.5");
}
