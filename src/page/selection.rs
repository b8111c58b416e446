//! Which posts the home page previews

use crate::content::PostSummary;

/// Bounds how many posts a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPolicy {
    max_display: usize,
}

impl DisplayPolicy {
    pub fn new(max_display: usize) -> Self {
        Self { max_display }
    }

    /// Take the first `max_display` posts of an already ordered sequence
    pub fn select<'a>(&self, posts: &'a [PostSummary]) -> Selection<'a> {
        let shown = &posts[..posts.len().min(self.max_display)];
        Selection {
            shown,
            total: posts.len(),
        }
    }
}

/// The posts chosen for display, and how many there were in total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub shown: &'a [PostSummary],
    pub total: usize,
}

impl Selection<'_> {
    /// No posts at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Posts were cut off, so the full listing is worth linking to
    pub fn has_more(&self) -> bool {
        self.total > self.shown.len()
    }
}
