//! TUI render pass.
//!
//! Blits the visible window of each pre-rendered surface into its panel
//! rectangle. The frame is ratatui's double buffer, so all panel blits
//! land on screen in one visible update. Colour attributes are resolved
//! here, per symbol, from the active scheme.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::layout::layout_panels;
use crate::viewer::ViewerState;

/// Renders the complete UI for the current scroll state.
pub fn render(frame: &mut Frame, state: &ViewerState) {
    let rects = layout_panels(
        frame.area(),
        state.id_width,
        state.alignment.sequence_count(),
    );

    render_track(frame, rects.ruler, state, state.ruler_window());
    render_track(frame, rects.density, state, state.density_window());
    render_corner(frame, rects.corner, state);
    render_ids(frame, rects.ids, state);
    render_sequences(frame, rects.sequences, state);
    render_status(frame, rects.status, state);
}

/// One-row track (ruler or density) over the sequence columns.
fn render_track(frame: &mut Frame, area: Rect, state: &ViewerState, rows: Vec<String>) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = state.resolver.track_style();
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(style), area);
}

/// "Non-gap %" label above the id panel.
fn render_corner(frame: &mut Frame, area: Rect, state: &ViewerState) {
    if area.height < 2 || area.width == 0 {
        return;
    }
    let style = state.resolver.track_style();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Non-gap %", style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Sequence-id labels, reverse video, clipped to the panel width.
fn render_ids(frame: &mut Frame, area: Rect, state: &ViewerState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = state.resolver.id_style();
    let lines: Vec<Line> = state
        .id_window()
        .into_iter()
        .map(|id| Line::from(Span::styled(format!("{:width$}", id, width = area.width as usize), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// The alignment grid: one styled span per symbol.
fn render_sequences(frame: &mut Frame, area: Rect, state: &ViewerState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let lines: Vec<Line> = state
        .sequence_window()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(c.to_string(), state.resolver.resolve(c)))
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Status bar across the bottom row.
fn render_status(frame: &mut Frame, area: Rect, state: &ViewerState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = state.resolver.status_style();
    let text = state.status_line();
    let line = Line::from(Span::styled(
        format!("{:width$}", text, width = area.width as usize),
        style,
    ));
    frame.render_widget(Paragraph::new(line), area);
}
