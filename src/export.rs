//! Download naming for exported PNG blobs.

/// Wall-clock timestamp used in export file names.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `player-<ms>.png`
pub fn player_file_name(millis: i64) -> String {
    format!("player-{millis}.png")
}

/// `video-4k-<ms>.png`
pub fn video_file_name(millis: i64) -> String {
    format!("video-4k-{millis}.png")
}

/// Name offered when re-downloading a gallery thumbnail: `player-<index>.png`.
pub fn gallery_file_name(index: usize) -> String {
    format!("player-{index}.png")
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
