//! List scrolling and virtualization.
//!
//! Small lists are laid out whole. Once a list grows past a threshold only
//! the rows in [`visible_window`] (the viewport plus some overscan) are
//! built each frame.

use std::ops::Range;

/// Item count above which a list is virtualized.
pub const DEFAULT_VIRTUALIZE_THRESHOLD: usize = 50;

/// Rows laid out above and below the viewport when virtualized.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Whether a list of `item_count` rows should be virtualized.
pub const fn should_virtualize(item_count: usize, threshold: usize) -> bool {
    item_count > threshold
}

/// Rows to lay out for a viewport at `offset` showing `height` rows.
///
/// ```
/// use hark::virtualize::visible_window;
///
/// assert_eq!(visible_window(0, 10, 3, 200), 0..16);
/// assert_eq!(visible_window(50, 10, 3, 200), 47..63);
/// assert_eq!(visible_window(195, 10, 3, 200), 192..200);
/// ```
pub fn visible_window(offset: usize, height: usize, overscan: usize, total: usize) -> Range<usize> {
    let start = offset.saturating_sub(overscan).min(total);
    let end = start
        .saturating_add(height)
        .saturating_add(overscan * 2)
        .min(total);
    start..end
}

/// Scroll state of a list measured in rows.
///
/// # Example
///
/// ```
/// use hark::virtualize::ListViewport;
///
/// let mut vp = ListViewport::new(10, 100);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.ensure_visible(42);
/// assert_eq!(vp.visible_range(), 33..43);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewport {
    height: u16,
    offset: usize,
    total_rows: usize,
}

impl ListViewport {
    pub const fn new(height: u16, total_rows: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_rows,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub const fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    /// Rows currently on screen, clamped to the list.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_rows);
        self.offset.min(end)..end
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll the minimum amount needed to bring `row` on screen.
    pub fn ensure_visible(&mut self, row: usize) {
        let height = self.height as usize;
        if height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = (row + 1 - height).min(self.max_offset());
        }
    }

    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the row count (e.g. after a refresh).
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height as usize)
    }
}
