use super::*;

#[test]
fn upper_half_ellipse_stays_above_center_line() {
    let c = Point::new(200.0, 230.0);
    let path = upper_half_ellipse(c, 42.0, 42.0);
    let bbox = path.bounding_box();
    assert!((bbox.x0 - 158.0).abs() < 0.5);
    assert!((bbox.x1 - 242.0).abs() < 0.5);
    assert!((bbox.y0 - 188.0).abs() < 0.5);
    assert!((bbox.y1 - 230.0).abs() < 0.5);
}

#[test]
fn polygon_with_no_points_is_skipped() {
    let mut list = DisplayList::new(Canvas::new(10, 10));
    list.fill_polygon(&[], Rgba8::WHITE);
    assert!(list.ops.is_empty());

    list.fill_polygon(
        &[Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(0.0, 5.0)],
        Rgba8::WHITE,
    );
    assert_eq!(list.ops.len(), 1);
}

#[test]
fn texts_are_listed_in_draw_order() {
    let mut list = DisplayList::new(Canvas::new(10, 10));
    list.text("7", 40.0, FontWeight::Bold, Point::ZERO, Rgba8::WHITE);
    list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::BLACK);
    list.text("GK", 16.0, FontWeight::Bold, Point::ZERO, Rgba8::BLACK);
    assert_eq!(list.texts().collect::<Vec<_>>(), vec!["7", "GK"]);
}
