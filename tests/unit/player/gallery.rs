use super::*;

fn img(ms: i64) -> GeneratedImage {
    GeneratedImage::new(vec![ms as u8], ms)
}

#[test]
fn newest_first_and_bounded() {
    let mut g = RecentGallery::default();
    assert_eq!(g.capacity(), 6);
    for ms in 0..8 {
        let evicted = g.push(img(ms));
        if ms < 6 {
            assert!(evicted.is_none());
        } else {
            assert_eq!(evicted.map(|e| e.created_at_ms), Some(ms - 6));
        }
    }
    assert_eq!(g.len(), 6);
    let order: Vec<i64> = g.iter().map(|i| i.created_at_ms).collect();
    assert_eq!(order, vec![7, 6, 5, 4, 3, 2]);
}

#[test]
fn generated_image_uses_timestamped_name() {
    let i = img(1234);
    assert_eq!(i.file_name, "player-1234.png");
}

#[test]
fn thumbnail_names_are_index_based() {
    let mut g = RecentGallery::with_capacity(0);
    assert_eq!(g.capacity(), 1);
    assert_eq!(g.thumbnail_file_name(0), None);
    g.push(img(5));
    assert_eq!(g.thumbnail_file_name(0).as_deref(), Some("player-0.png"));
    assert_eq!(g.thumbnail_file_name(1), None);
}
