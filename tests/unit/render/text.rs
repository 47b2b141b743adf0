use super::*;

#[test]
fn empty_library_skips_text() {
    let mut shaper = TextShaper::new(FontLibrary::empty());
    let shaped = shaper
        .shape("10", 40.0, FontWeight::Bold, TextBrushRgba8::default())
        .unwrap();
    assert!(shaped.is_none());
}

#[test]
fn invalid_size_is_rejected_before_font_lookup() {
    let mut shaper = TextShaper::new(FontLibrary::empty());
    assert!(
        shaper
            .shape("10", 0.0, FontWeight::Bold, TextBrushRgba8::default())
            .is_err()
    );
}

#[test]
fn missing_font_file_is_reported() {
    let err = FontLibrary::from_file(Path::new("/no/such/font.ttf")).unwrap_err();
    assert!(err.to_string().contains("read font"));
}

#[test]
fn weight_lookup_falls_back_to_other_face() {
    let face = FontFace {
        bytes: Arc::new(vec![0u8; 4]),
        index: 0,
    };
    let lib = FontLibrary {
        bold: None,
        regular: Some(face),
    };
    assert!(lib.face(FontWeight::Bold).is_some());
    assert!(!lib.is_empty());
    assert!(FontLibrary::empty().is_empty());
}
