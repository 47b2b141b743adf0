use super::*;

#[test]
fn defaults_match_fixed_surfaces() {
    let cfg = StudioConfig::default();
    assert_eq!(cfg.figure_surface, Canvas::new(400, 600));
    assert_eq!(cfg.composite_surface, Canvas::new(3840, 2160));
    assert_eq!(cfg.gallery_capacity, 6);
    assert!(cfg.font_path.is_none());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: StudioConfig =
        serde_json::from_str(r#"{ "composite_surface": { "width": 384, "height": 216 } }"#)
            .unwrap();
    assert_eq!(cfg.composite_surface, Canvas::new(384, 216));
    assert_eq!(cfg.figure_surface, FIGURE_CANVAS);
    assert_eq!(cfg.gallery_capacity, DEFAULT_GALLERY_CAPACITY);
}

#[test]
fn from_json_file_rejects_zero_surface() {
    let dir = std::env::temp_dir().join(format!("pitchstudio-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{ "figure_surface": { "width": 0, "height": 600 } }"#).unwrap();

    let err = StudioConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, crate::StudioError::SurfaceUnavailable(_)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn from_json_file_reports_missing_file() {
    let err = StudioConfig::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("read config"));
}
