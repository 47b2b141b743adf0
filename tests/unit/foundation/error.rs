use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(StudioError::EmptyInput.to_string().contains("empty input"));
    assert!(
        StudioError::decode(2, "bad png")
            .to_string()
            .contains("decode failure for image #2: bad png")
    );
    assert!(
        StudioError::surface("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        StudioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StudioError::encode("x").to_string().contains("encode error:"));
    assert!(StudioError::Cancelled.to_string().contains("cancelled"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StudioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
