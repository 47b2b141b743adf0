use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"definitely not an image").is_err());
}

#[test]
fn solid_rejects_empty_dimensions() {
    assert!(PreparedImage::solid(0, 4, [1, 2, 3, 255]).is_err());
    let img = PreparedImage::solid(2, 3, [1, 2, 3, 255]).unwrap();
    assert_eq!(img.rgba8_premul.len(), 2 * 3 * 4);
}

#[test]
fn raster_limits_reject_oversized_sides() {
    assert!(PreparedImage::solid(8, 8, [0, 0, 0, 255]).unwrap().check_raster_limits().is_ok());
    let wide = PreparedImage::solid(70_000, 1, [0, 0, 0, 255]).unwrap();
    assert!(matches!(
        wide.check_raster_limits(),
        Err(StudioError::Validation(_))
    ));
}
