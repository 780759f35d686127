//! Viewport controller: scroll state and navigation over the alignment.
//!
//! All panel content is rendered into off-screen surfaces once, at
//! construction. After that, every navigation command only moves the
//! offsets and every redraw blits sub-rectangles of those surfaces; the
//! sequence grid is never rebuilt. Each operation saturates at the
//! alignment boundaries, so none of them can fail.

use ratatui::layout::Rect;

use crate::color::{ColourResolver, Scheme, TermCaps};
use crate::gaps::{resegment, GapRunError};
use crate::layout::{layout_panels, PanelRects};
use crate::model::{Alignment, Alphabet};
use crate::surface::Surface;
use crate::tracks::{ruler_string, DensityTrack};

/// Horizontal scroll step in columns.
const H_STEP: usize = 10;
/// Starting width of the sequence-id panel.
const DEFAULT_ID_WIDTH: u16 = 13;

/// The complete viewer state: one alignment, its pre-rendered surfaces,
/// and the mutable scroll offsets.
#[derive(Debug)]
pub struct ViewerState {
    pub alignment: Alignment,
    /// Name of the file on display, for the status bar
    pub filename: String,

    /// Index of the top visible sequence; 0 <= offset_y <= total - view_height
    pub offset_y: usize,
    /// Index of the leftmost visible column; 0 <= offset_x <= width - view_width
    pub offset_x: usize,
    /// Width of the id panel; 0 <= id_width <= longest id
    pub id_width: u16,
    /// Rows currently available to the sequence panel
    pub view_height: usize,
    /// Columns currently available to the sequence panel
    pub view_width: usize,

    /// Terminal area from the last resize, kept so id-panel changes can
    /// re-derive the geometry without a new resize event
    bounds: Rect,

    pub resolver: ColourResolver,
    pub should_quit: bool,
    /// A 'g' has been seen and the next key decides the gg jump
    pub pending_g: bool,

    seq_surface: Surface,
    id_surface: Surface,
    ruler_surface: Surface,
    density_surface: Surface,
}

impl ViewerState {
    /// Renders all content surfaces and starts at the origin with the
    /// light scheme, mirroring what the terminal mode starts in.
    ///
    /// Fails only if the gap-run scanner detects internal corruption.
    pub fn new(
        alignment: Alignment,
        filename: String,
        preserve_gaps: bool,
        alphabet: Alphabet,
        caps: TermCaps,
    ) -> Result<Self, GapRunError> {
        let total = alignment.sequence_count();
        let width = alignment.align_width();

        let mut seq_surface = Surface::new(total, width);
        for (y, seq) in alignment.sequences.iter().enumerate() {
            let row = resegment(&seq.data, preserve_gaps)?;
            seq_surface.put_str(y, 0, &row);
        }

        let max_id = alignment.max_id_length();
        let mut id_surface = Surface::new(total, max_id);
        for (y, seq) in alignment.sequences.iter().enumerate() {
            id_surface.put_str(y, 0, &seq.id);
        }

        let mut ruler_surface = Surface::new(1, width);
        ruler_surface.put_str(0, 0, &ruler_string(width));

        let mut density_surface = Surface::new(1, width);
        density_surface.put_str(0, 0, DensityTrack::new(&alignment).glyph_row());

        Ok(Self {
            alignment,
            filename,
            offset_y: 0,
            offset_x: 0,
            id_width: DEFAULT_ID_WIDTH.min(max_id as u16),
            view_height: 0,
            view_width: 0,
            bounds: Rect::default(),
            resolver: ColourResolver::new(Scheme::Light, alphabet, caps),
            should_quit: false,
            pending_g: false,
            seq_surface,
            id_surface,
            ruler_surface,
            density_surface,
        })
    }

    /// Current panel rectangles for the stored bounds.
    pub fn panels(&self) -> PanelRects {
        layout_panels(self.bounds, self.id_width, self.alignment.sequence_count())
    }

    /// Recomputes the view dimensions for a new terminal area and
    /// re-clamps both offsets. Content surfaces are untouched.
    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    fn relayout(&mut self) {
        let rects = self.panels();
        self.view_height = rects.sequences.height as usize;
        self.view_width = rects.sequences.width as usize;
        self.clamp_offsets();
    }

    fn max_offset_y(&self) -> usize {
        self.alignment
            .sequence_count()
            .saturating_sub(self.view_height)
    }

    fn max_offset_x(&self) -> usize {
        self.alignment.align_width().saturating_sub(self.view_width)
    }

    fn clamp_offsets(&mut self) {
        self.offset_y = self.offset_y.min(self.max_offset_y());
        self.offset_x = self.offset_x.min(self.max_offset_x());
    }

    /// Scrolls down one page.
    pub fn page_down(&mut self) {
        self.offset_y = (self.offset_y + self.view_height).min(self.max_offset_y());
    }

    /// Scrolls up one page.
    pub fn page_up(&mut self) {
        self.offset_y = self.offset_y.saturating_sub(self.view_height);
    }

    /// Scrolls right by ten columns.
    pub fn scroll_right(&mut self) {
        self.offset_x = (self.offset_x + H_STEP).min(self.max_offset_x());
    }

    /// Scrolls left by ten columns.
    pub fn scroll_left(&mut self) {
        self.offset_x = self.offset_x.saturating_sub(H_STEP);
    }

    /// Jumps to the first sequence.
    pub fn jump_top(&mut self) {
        self.offset_y = 0;
    }

    /// Jumps to the last page of sequences.
    pub fn jump_bottom(&mut self) {
        self.offset_y = self.max_offset_y();
    }

    /// Jumps to the first alignment column.
    pub fn jump_line_start(&mut self) {
        self.offset_x = 0;
    }

    /// Jumps to the last page of columns.
    pub fn jump_line_end(&mut self) {
        self.offset_x = self.max_offset_x();
    }

    /// Widens the id panel by one column, up to the longest id.
    pub fn grow_id_panel(&mut self) {
        self.id_width = (self.id_width + 1).min(self.alignment.max_id_length() as u16);
        self.relayout();
    }

    /// Narrows the id panel by one column, down to zero.
    pub fn shrink_id_panel(&mut self) {
        self.id_width = self.id_width.saturating_sub(1);
        self.relayout();
    }

    /// Widens the id panel to fit the longest id.
    pub fn maximise_id_panel(&mut self) {
        self.id_width = self.alignment.max_id_length() as u16;
        self.relayout();
    }

    /// Hides the id panel.
    pub fn minimise_id_panel(&mut self) {
        self.id_width = 0;
        self.relayout();
    }

    /// Switches the colour scheme. A no-op when the terminal has no
    /// colour support; content surfaces stay as rendered, the new scheme
    /// applies on the next blit.
    pub fn set_scheme(&mut self, key: u8) {
        if !self.resolver.caps.supports_colour {
            return;
        }
        if let Some(scheme) = Scheme::from_key(key) {
            self.resolver.scheme = scheme;
        }
    }

    /// Visible window of the sequence grid at the current offsets.
    pub fn sequence_window(&self) -> Vec<String> {
        self.seq_surface
            .window(self.offset_y, self.offset_x, self.view_height, self.view_width)
    }

    /// Visible window of the id labels at the current offsets.
    pub fn id_window(&self) -> Vec<String> {
        self.id_surface
            .window(self.offset_y, 0, self.view_height, self.id_width as usize)
    }

    /// Visible window of the position ruler.
    pub fn ruler_window(&self) -> Vec<String> {
        self.ruler_surface.window(0, self.offset_x, 1, self.view_width)
    }

    /// Visible window of the density track.
    pub fn density_window(&self) -> Vec<String> {
        self.density_surface.window(0, self.offset_x, 1, self.view_width)
    }

    /// Status line: visible sequence range, alignment size, file name.
    pub fn status_line(&self) -> String {
        let total = self.alignment.sequence_count();
        let viewmax = if total > self.view_height {
            self.offset_y + self.view_height
        } else {
            total
        };
        format!(
            "Viewing sequences: {}-{}/{}, Alignment length: {} [{}]",
            self.offset_y + 1,
            viewmax,
            total,
            self.alignment.align_width(),
            self.filename
        )
    }
}
