//! Panel geometry.
//!
//! A pure function from the terminal area, the id-panel width and the
//! sequence count to the rectangles of the five panels. Recomputed on
//! every resize and id-panel width change; all arithmetic saturates, so a
//! viewport smaller than the minimum layout clips panels to zero size
//! instead of failing.
//!
//! Row layout, top to bottom: position ruler, density track, id/sequence
//! panels, status bar. The ruler and density track span only the sequence
//! columns; a two-row corner label sits above the id panel.

use ratatui::layout::Rect;

/// Rectangles for every panel of the viewer. Zero-size rectangles are
/// valid and render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRects {
    /// Column-position ruler, one row, over the sequence panel
    pub ruler: Rect,
    /// Gap-density heatmap, one row, under the ruler
    pub density: Rect,
    /// "Non-gap %" label region left of the tracks
    pub corner: Rect,
    /// Sequence-id labels, left column
    pub ids: Rect,
    /// The alignment grid itself
    pub sequences: Rect,
    /// Status bar, bottom row, full width
    pub status: Rect,
}

/// Number of rows consumed by the ruler, density track and status bar.
pub const CHROME_ROWS: u16 = 3;

/// Computes panel rectangles for the given viewport.
pub fn layout_panels(area: Rect, id_width: u16, total_seqs: usize) -> PanelRects {
    let id_w = id_width.min(area.width);
    let seq_x = area.x + id_w;
    let seq_w = area.width - id_w;

    let ruler_h = u16::from(area.height >= 1);
    let density_h = u16::from(area.height >= 2);
    let status_h = u16::from(area.height >= 3);

    let body_h = area.height.saturating_sub(CHROME_ROWS);
    let seq_h = (body_h as usize).min(total_seqs) as u16;

    let body_y = area.y + ruler_h + density_h;
    let status_y = area.y + area.height.saturating_sub(1);

    PanelRects {
        ruler: Rect::new(seq_x, area.y, seq_w, ruler_h),
        density: Rect::new(seq_x, area.y + ruler_h, seq_w, density_h),
        corner: Rect::new(area.x, area.y, id_w, ruler_h + density_h),
        ids: Rect::new(area.x, body_y, id_w, seq_h),
        sequences: Rect::new(seq_x, body_y, seq_w, seq_h),
        status: Rect::new(area.x, status_y, area.width, status_h),
    }
}
