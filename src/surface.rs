//! Off-screen character surfaces.
//!
//! Each panel's full content is rendered once into a [`Surface`] at
//! startup; navigation only selects which window of a surface is blitted
//! to the screen. Surfaces store plain symbols — colour attributes are
//! resolved at blit time from the active scheme, so switching schemes
//! never re-renders content.

/// A fixed-size grid of characters, write-once then read-only.
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Surface {
    /// Creates a blank surface of the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Writes a run of characters starting at (row, col), clipping at the
    /// surface edge. Out-of-range rows are ignored.
    pub fn put_str(&mut self, row: usize, col: usize, s: &str) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        for (i, c) in s.chars().enumerate() {
            match cells.get_mut(col + i) {
                Some(cell) => *cell = c,
                None => break,
            }
        }
    }

    /// Extracts a sub-rectangle as rows of characters, clipped to the
    /// surface bounds. Rows or columns past the content come back short or
    /// absent; the blit simply draws nothing there.
    pub fn window(&self, top: usize, left: usize, height: usize, width: usize) -> Vec<String> {
        self.rows
            .iter()
            .skip(top)
            .take(height)
            .map(|cells| {
                cells
                    .iter()
                    .skip(left)
                    .take(width)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_window() {
        let mut s = Surface::new(2, 6);
        s.put_str(0, 0, "ACGT");
        s.put_str(1, 2, "NN");
        assert_eq!(s.window(0, 0, 2, 6), vec!["ACGT  ", "  NN  "]);
    }

    #[test]
    fn test_put_clips_at_right_edge() {
        let mut s = Surface::new(1, 4);
        s.put_str(0, 2, "ACGT");
        assert_eq!(s.window(0, 0, 1, 4), vec!["  AC"]);
    }

    #[test]
    fn test_put_out_of_range_row_ignored() {
        let mut s = Surface::new(1, 4);
        s.put_str(5, 0, "ACGT");
        assert_eq!(s.window(0, 0, 1, 4), vec!["    "]);
    }

    #[test]
    fn test_window_clips_to_content() {
        let mut s = Surface::new(2, 4);
        s.put_str(0, 0, "ACGT");
        // request larger than content: rows clip, columns shorten
        let w = s.window(1, 2, 5, 10);
        assert_eq!(w, vec!["  "]);
        assert!(s.window(5, 0, 3, 3).is_empty());
    }

    #[test]
    fn test_zero_size_window() {
        let s = Surface::new(3, 3);
        assert!(s.window(0, 0, 0, 3).is_empty());
        assert_eq!(s.window(0, 0, 2, 0), vec!["", ""]);
    }
}
