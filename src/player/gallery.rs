use std::collections::VecDeque;
use std::sync::Arc;

use crate::export;
use crate::foundation::config::DEFAULT_GALLERY_CAPACITY;

/// One exported figure: PNG bytes plus the name it was offered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    /// `player-<ms>.png`.
    pub file_name: String,
    /// Unix milliseconds at generation time.
    pub created_at_ms: i64,
    /// Encoded image, shared with the thumbnail view.
    pub png: Arc<Vec<u8>>,
}

impl GeneratedImage {
    /// Wrap `png`, naming it after `created_at_ms`.
    pub fn new(png: Vec<u8>, created_at_ms: i64) -> Self {
        Self {
            file_name: export::player_file_name(created_at_ms),
            created_at_ms,
            png: Arc::new(png),
        }
    }
}

/// Most-recent-first list of generated figures with a fixed capacity.
#[derive(Clone, Debug)]
pub struct RecentGallery {
    items: VecDeque<GeneratedImage>,
    capacity: usize,
}

impl Default for RecentGallery {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_GALLERY_CAPACITY)
    }
}

impl RecentGallery {
    /// A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front; returns the entry evicted from the back, if any.
    pub fn push(&mut self, image: GeneratedImage) -> Option<GeneratedImage> {
        self.items.push_front(image);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&GeneratedImage> {
        self.items.get(index)
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedImage> + '_ {
        self.items.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True before the first push.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Download name for the thumbnail at `index`, if it exists.
    pub fn thumbnail_file_name(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|_| export::gallery_file_name(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/gallery.rs"]
mod tests;
