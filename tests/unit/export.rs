use super::*;

#[test]
fn names_follow_download_patterns() {
    assert_eq!(player_file_name(1_700_000_000_123), "player-1700000000123.png");
    assert_eq!(video_file_name(42), "video-4k-42.png");
    assert_eq!(gallery_file_name(0), "player-0.png");
}

#[test]
fn timestamp_is_after_2020() {
    assert!(unix_millis_now() > 1_577_836_800_000);
}
