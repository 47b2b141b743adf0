use super::*;

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(Canvas::new(4, 3)).unwrap();
    assert_eq!(s.size(), Canvas::new(4, 3));
    assert_eq!(s.pixel(0, 0), Some(Rgba8::rgba(0, 0, 0, 0)));
    assert_eq!(s.pixel(4, 0), None);
    assert_eq!(s.to_frame().data.len(), 4 * 3 * 4);
}

#[test]
fn zero_sized_surface_is_unavailable() {
    let err = Surface::new(Canvas::new(0, 10)).unwrap_err();
    assert!(matches!(err, StudioError::SurfaceUnavailable(_)));
}

#[test]
fn encode_png_is_lossless() {
    let mut s = Surface::new(Canvas::new(2, 2)).unwrap();
    s.pixmap_mut()
        .data_as_u8_slice_mut()
        .copy_from_slice(&[
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            0, 0, 0, 0,
        ]);
    let png = s.encode_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);
    assert_eq!(decoded.get_pixel(0, 1).0, [0, 0, 255, 255]);
    assert_eq!(decoded.get_pixel(1, 1).0[3], 0);

    s.clear();
    assert_eq!(s.pixel(0, 0), Some(Rgba8::rgba(0, 0, 0, 0)));
}
