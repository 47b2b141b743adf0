use super::*;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn uploads_keep_order_and_support_removal() {
    let mut up = UploadedImages::new();
    up.push("a.png", vec![1]);
    up.extend([("b.png", vec![2]), ("c.png", vec![3])]);
    assert_eq!(up.len(), 3);
    let removed = up.remove(1).unwrap();
    assert_eq!(removed.name, "b.png");
    assert!(up.remove(5).is_none());
    let names: Vec<&str> = up.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "c.png"]);
    assert_eq!(up.pending().len(), 2);
}

#[tokio::test]
async fn encoded_png_decodes_on_blocking_pool() {
    let img = PendingImage::from(png_bytes(3, 2)).decode(0).await.unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(&img.rgba8_premul[..4], &[10, 20, 30, 255]);
}

#[tokio::test]
async fn garbage_bytes_report_decode_failure_with_index() {
    let err = PendingImage::from(b"not an image".to_vec())
        .decode(4)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::DecodeFailure { index: 4, .. }), "{err}");
}

#[tokio::test]
async fn ready_images_pass_through() {
    let solid = PreparedImage::solid(2, 2, [0, 0, 0, 255]).unwrap();
    let out = PendingImage::from(solid.clone()).decode(0).await.unwrap();
    assert!(Arc::ptr_eq(&out.rgba8_premul, &solid.rgba8_premul));
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let mut up = UploadedImages::new();
    let err = up
        .extend_from_files(&["/definitely/not/here.png"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("read image"), "{err}");
    assert!(up.is_empty());
}

#[tokio::test]
async fn undrawable_ready_image_reports_decode_failure() {
    let tall = PreparedImage::solid(1, 70_000, [0, 0, 0, 255]).unwrap();
    let err = PendingImage::from(tall).decode(2).await.unwrap_err();
    assert!(matches!(err, StudioError::DecodeFailure { index: 2, .. }), "{err}");
}
