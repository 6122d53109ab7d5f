//! Row layout calculation: container size to per-pane rects.

use chorus_common::types::{Rect, Size};

use super::LayoutEngine;

/// Bounds of pane `index` out of `pane_count` panes tiled in one row.
///
/// Every pane gets `floor(width / pane_count)` pixels; the remainder stays
/// unused on the right edge. Height is the container height minus the
/// reserved chrome, clamped at zero. Returns `None` for an empty row or an
/// index past the end.
pub fn compute_bounds(
    container_width: u32,
    container_height: u32,
    pane_count: usize,
    index: usize,
    reserved_chrome_height: u32,
) -> Option<Rect> {
    if pane_count == 0 || index >= pane_count {
        return None;
    }
    let count = u32::try_from(pane_count).ok()?;
    let index = u32::try_from(index).ok()?;
    let width = container_width / count;
    Some(Rect {
        x: index * width,
        y: 0,
        width,
        height: container_height.saturating_sub(reserved_chrome_height),
    })
}

/// Bounds for every pane of a row, in registry order.
pub fn row_bounds(
    container_width: u32,
    container_height: u32,
    pane_count: usize,
    reserved_chrome_height: u32,
) -> Vec<Rect> {
    (0..pane_count)
        .filter_map(|i| {
            compute_bounds(
                container_width,
                container_height,
                pane_count,
                i,
                reserved_chrome_height,
            )
        })
        .collect()
}

impl LayoutEngine {
    /// Rects for `pane_count` panes inside a container of `size`.
    pub fn compute(&self, size: Size, pane_count: usize) -> Vec<Rect> {
        row_bounds(
            size.width,
            size.height,
            pane_count,
            self.reserved_chrome_height,
        )
    }

    /// The strip below the panes where the prompt chrome lives.
    pub fn chrome_rect(&self, size: Size) -> Rect {
        let height = self.reserved_chrome_height.min(size.height);
        Rect {
            x: 0,
            y: size.height - height,
            width: size.width,
            height,
        }
    }
}
