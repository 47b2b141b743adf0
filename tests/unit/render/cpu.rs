use super::*;
use crate::foundation::core::Canvas;

fn close(a: Rgba8, b: Rgba8, tol: i32) -> bool {
    (i32::from(a.r) - i32::from(b.r)).abs() <= tol
        && (i32::from(a.g) - i32::from(b.g)).abs() <= tol
        && (i32::from(a.b) - i32::from(b.b)).abs() <= tol
        && (i32::from(a.a) - i32::from(b.a)).abs() <= tol
}

#[test]
fn vertical_gradient_hits_both_stops() {
    let start = Rgba8::rgb(0x1A, 0x1F, 0x3A);
    let end = Rgba8::rgb(0x0A, 0x0E, 0x27);
    let bytes = rasterize_linear_gradient(
        start,
        end,
        Point::new(0.0, 0.5),
        Point::new(0.0, 2.5),
        2,
        3,
    );
    assert_eq!(&bytes[0..4], &start.to_premul());
    assert_eq!(&bytes[4..8], &start.to_premul());
    assert_eq!(&bytes[(2 * 2) * 4..(2 * 2) * 4 + 4], &end.to_premul());
}

#[test]
fn degenerate_gradient_uses_start_color() {
    let bytes = rasterize_linear_gradient(
        Rgba8::WHITE,
        Rgba8::BLACK,
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        2,
        2,
    );
    assert!(bytes.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn fill_rect_covers_whole_pixels() {
    let mut list = DisplayList::new(Canvas::new(8, 8));
    list.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgba8::rgb(10, 20, 30));
    list.fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0), Rgba8::rgb(200, 0, 0));

    let mut surface = Surface::new(Canvas::new(8, 8)).unwrap();
    let mut raster = CpuRasterizer::new(FontLibrary::empty());
    raster.execute(&list, &mut surface).unwrap();

    assert_eq!(surface.pixel(0, 0), Some(Rgba8::rgb(10, 20, 30)));
    assert_eq!(surface.pixel(3, 3), Some(Rgba8::rgb(200, 0, 0)));
    assert_eq!(surface.pixel(5, 5), Some(Rgba8::rgb(10, 20, 30)));
}

#[test]
fn viewport_scales_logical_canvas_down() {
    let mut list = DisplayList::new(Canvas::new(80, 80));
    list.fill_rect(Rect::new(0.0, 0.0, 80.0, 80.0), Rgba8::BLACK);
    list.fill_rect(Rect::new(40.0, 40.0, 80.0, 80.0), Rgba8::WHITE);

    let mut surface = Surface::new(Canvas::new(8, 8)).unwrap();
    let mut raster = CpuRasterizer::new(FontLibrary::empty());
    raster.execute(&list, &mut surface).unwrap();

    assert_eq!(surface.pixel(1, 1), Some(Rgba8::BLACK));
    assert_eq!(surface.pixel(6, 6), Some(Rgba8::WHITE));
}

#[test]
fn execute_clears_previous_contents() {
    let mut surface = Surface::new(Canvas::new(4, 4)).unwrap();
    let mut raster = CpuRasterizer::new(FontLibrary::empty());

    let mut first = DisplayList::new(Canvas::new(4, 4));
    first.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Rgba8::WHITE);
    raster.execute(&first, &mut surface).unwrap();
    assert_eq!(surface.pixel(0, 0), Some(Rgba8::WHITE));

    let empty = DisplayList::new(Canvas::new(4, 4));
    raster.execute(&empty, &mut surface).unwrap();
    assert_eq!(surface.pixel(0, 0).map(|c| c.a), Some(0));
}

#[test]
fn image_opacity_gates_draw() {
    let img = PreparedImage::solid(2, 2, [255, 0, 0, 255]).unwrap();
    let mut surface = Surface::new(Canvas::new(4, 4)).unwrap();
    let mut raster = CpuRasterizer::new(FontLibrary::empty());

    let mut list = DisplayList::new(Canvas::new(4, 4));
    list.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Rgba8::BLACK);
    list.push(DrawOp::Image {
        image: img.clone(),
        dest: Rect::new(0.0, 0.0, 4.0, 4.0),
        transform: Affine::IDENTITY,
        opacity: 0.0,
    });
    raster.execute(&list, &mut surface).unwrap();
    assert_eq!(surface.pixel(1, 1), Some(Rgba8::BLACK));

    list.ops.pop();
    list.push(DrawOp::Image {
        image: img,
        dest: Rect::new(0.0, 0.0, 4.0, 4.0),
        transform: Affine::IDENTITY,
        opacity: 1.0,
    });
    raster.execute(&list, &mut surface).unwrap();
    let px = surface.pixel(1, 1).unwrap();
    assert!(close(px, Rgba8::rgb(255, 0, 0), 2), "{px:?}");
}

#[test]
fn text_without_fonts_draws_nothing() {
    let mut list = DisplayList::new(Canvas::new(4, 4));
    list.text(
        "GK",
        16.0,
        crate::render::plan::FontWeight::Bold,
        Point::new(2.0, 3.0),
        Rgba8::WHITE,
    );

    let mut surface = Surface::new(Canvas::new(4, 4)).unwrap();
    let mut raster = CpuRasterizer::new(FontLibrary::empty());
    raster.execute(&list, &mut surface).unwrap();
    assert!(surface.to_frame().data.iter().all(|&b| b == 0));
}
