use super::*;
use crate::assets::decode::PreparedImage;
use crate::video::settings::{Theme, Transition};

fn compositor() -> FrameCompositor {
    FrameCompositor::with_surface(Canvas::new(96, 54), FontLibrary::empty()).unwrap()
}

fn solid(rgba: [u8; 4]) -> PendingImage {
    PreparedImage::solid(64, 36, rgba).unwrap().into()
}

#[tokio::test]
async fn empty_input_fails_without_progress() {
    let mut calls = 0;
    let err = compositor()
        .compose(
            Vec::new(),
            &VideoSettings::default(),
            |_| calls += 1,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::EmptyInput));
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn progress_is_strictly_increasing_and_ends_at_100() {
    let mut seen = Vec::new();
    let summary = compositor()
        .compose(
            vec![solid([255, 0, 0, 255]), solid([0, 255, 0, 255])],
            &VideoSettings::default(),
            |p| seen.push(p),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "{seen:?}");
    assert_eq!(seen.first(), Some(&1));
    assert_eq!(seen.iter().filter(|p| **p == 100).count(), 1);
    assert_eq!(seen.last(), Some(&100));
    assert_eq!(summary.frames_composited, 120);
    assert_eq!(summary.image_count, 2);
    assert!(summary.skipped.is_empty());
}

#[tokio::test]
async fn undecodable_image_is_skipped_but_counted() {
    let mut seen = Vec::new();
    let settings = VideoSettings {
        theme: Theme::Cinematic,
        transition: Transition::Slide,
        ..VideoSettings::default()
    };
    let summary = compositor()
        .compose(
            vec![
                solid([0, 0, 255, 255]),
                PendingImage::from(b"corrupt".to_vec()),
                solid([0, 0, 255, 255]),
            ],
            &settings,
            |p| seen.push(p),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(summary.skipped, vec![1]);
    assert_eq!(summary.frames_composited, 120);
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "{seen:?}");
    assert!(seen.contains(&67));
    assert!(summary.subtitle.starts_with("3 images"));
}

#[tokio::test]
async fn oversized_image_is_skipped_but_counted() {
    let mut seen = Vec::new();
    let wide: PendingImage = PreparedImage::solid(70_000, 1, [0, 255, 0, 255])
        .unwrap()
        .into();
    let summary = compositor()
        .compose(
            vec![solid([255, 0, 0, 255]), wide],
            &VideoSettings::default(),
            |p| seen.push(p),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(summary.skipped, vec![1]);
    assert_eq!(summary.frames_composited, 60);
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "{seen:?}");
}

#[tokio::test]
async fn cancelled_token_aborts_before_any_frame() {
    let token = CancellationToken::new();
    token.cancel();
    let mut calls = 0;
    let err = compositor()
        .compose(
            vec![solid([1, 2, 3, 255])],
            &VideoSettings::default(),
            |_| calls += 1,
            &token,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Cancelled));
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn cancellation_between_images_discards_output() {
    let token = CancellationToken::new();
    let trigger = token.clone();
    let mut seen = Vec::new();
    let err = compositor()
        .compose(
            vec![solid([9, 9, 9, 255]), solid([9, 9, 9, 255])],
            &VideoSettings::default(),
            |p| {
                seen.push(p);
                if p == 50 {
                    trigger.cancel();
                }
            },
            &token,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Cancelled));
    assert_eq!(seen.last(), Some(&50));
}

#[tokio::test]
async fn summary_frame_is_a_png_of_the_surface() {
    let mut c = compositor();
    let summary = c
        .compose(
            vec![solid([200, 100, 50, 255])],
            &VideoSettings::default(),
            |_| {},
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    let decoded = image::load_from_memory(&summary.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (96, 54));
    assert!(summary.file_name.starts_with("video-4k-"));
    assert_eq!(summary.title, "4K Video Created");
    assert_eq!(summary.subtitle, "1 images • 4K • FADE");
    assert_eq!(c.surface().pixel(0, 0), Some(crate::foundation::color::Rgba8::from_u24(0x0A0E27)));
}
