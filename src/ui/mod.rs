//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`live_region`]: The two screen-reader live regions
//! - [`pull_indicator`]: Pull-to-refresh indicator
//! - the notes list and note view, status bar, and help overlay

pub mod live_region;
pub mod pull_indicator;

mod overlays;
mod render;
mod status;

pub use live_region::LiveRegion;
pub use pull_indicator::PullIndicator;
pub use render::render;

use ratatui::layout::Rect;

use crate::app::Model;

/// Rows used by everything except list rows: list border (2), the live
/// region row and the status bar.
pub const CHROME_ROWS: u16 = 4;

/// List rows available in a terminal `height` rows tall.
pub const fn list_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

/// Area inside the list border, before any pull indicator is placed.
pub const fn list_inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        list_rows(area.height),
    )
}

/// Where the pull indicator and the note rows go inside the list border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Rows taken by the pull indicator (zero height when hidden).
    pub indicator: Rect,
    /// Rows showing notes.
    pub rows: Rect,
    /// Note drawn on the first of `rows`.
    pub offset: usize,
}

impl ListLayout {
    /// Note index under terminal row `y`, if any.
    pub fn index_at(&self, y: u16) -> Option<usize> {
        if y < self.rows.y || y >= self.rows.bottom() {
            return None;
        }
        Some(self.offset + usize::from(y - self.rows.y))
    }
}

/// Split `inner` between the pull indicator and the notes.
///
/// The indicator pushes the notes down. The offset is nudged so the
/// selected note stays on the rows that are left.
pub fn list_layout(model: &Model, inner: Rect) -> ListLayout {
    let indicator_height = model
        .pull
        .indicator()
        .map_or(0, |g| g.height.min(inner.height.saturating_sub(1)));
    let indicator = Rect::new(inner.x, inner.y, inner.width, indicator_height);
    let rows = Rect::new(
        inner.x,
        inner.y + indicator_height,
        inner.width,
        inner.height - indicator_height,
    );

    let height = usize::from(rows.height);
    let mut offset = model.viewport.offset();
    if height > 0 && !model.notes.is_empty() && model.selected >= offset + height {
        offset = model.selected + 1 - height;
    }
    ListLayout {
        indicator,
        rows,
        offset,
    }
}

#[cfg(test)]
mod tests;
