//! Auxiliary single-row tracks drawn above the sequence panel.
//!
//! - [`DensityTrack`]: a per-column heatmap of how much sequence content
//!   survives in each alignment column, bucketed into nine block glyphs.
//! - [`ruler_string`]: the column-position ruler.

use crate::gaps::is_gap;
use crate::model::Alignment;

/// The nine density glyphs, emptiest content first.
const DENSITY_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Gap-fraction thresholds for buckets 0..8; comparisons are strict, so a
/// fraction sitting exactly on a boundary falls to the denser bucket.
const DENSITY_THRESHOLDS: [f64; 8] = [0.89, 0.77, 0.66, 0.55, 0.44, 0.33, 0.22, 0.11];

/// Per-column occupancy heatmap, computed once per alignment.
#[derive(Debug, Clone)]
pub struct DensityTrack {
    glyphs: String,
}

impl DensityTrack {
    /// Counts gap characters per column and buckets each column's gap
    /// fraction. O(sequences × columns), run once at startup.
    pub fn new(alignment: &Alignment) -> Self {
        let width = alignment.align_width();
        let total = alignment.sequence_count();
        let mut gap_count = vec![0usize; width];
        for seq in &alignment.sequences {
            for (i, c) in seq.data.chars().enumerate() {
                if is_gap(c) {
                    gap_count[i] += 1;
                }
            }
        }
        let glyphs = gap_count
            .iter()
            .map(|&n| {
                let pc = if total == 0 { 0.0 } else { n as f64 / total as f64 };
                DENSITY_GLYPHS[Self::bucket(pc) as usize]
            })
            .collect();
        Self { glyphs }
    }

    /// Maps a gap fraction to a bucket in [0, 8]; 0 is blank (column is
    /// nearly all gaps), 8 is a full block (column is nearly all residues).
    pub fn bucket(pc: f64) -> u8 {
        for (i, &threshold) in DENSITY_THRESHOLDS.iter().enumerate() {
            if pc > threshold {
                return i as u8;
            }
        }
        8
    }

    /// The whole track as one row of glyphs, one per alignment column.
    pub fn glyph_row(&self) -> &str {
        &self.glyphs
    }
}

/// Builds the column-position ruler: "1" over the first column, then the
/// column number over every multiple of ten that fits.
pub fn ruler_string(align_width: usize) -> String {
    let mut ruler = vec![' '; align_width];
    if align_width > 0 {
        ruler[0] = '1';
    }
    let mut mark = 10;
    while mark <= align_width {
        let label = mark.to_string();
        let start = mark - 1;
        if start + label.len() <= align_width {
            for (i, c) in label.chars().enumerate() {
                ruler[start + i] = c;
            }
        }
        mark += 10;
    }
    ruler.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sequence;

    fn alignment(rows: &[&str]) -> Alignment {
        Alignment::new(
            rows.iter()
                .enumerate()
                .map(|(i, r)| Sequence::new(format!("seq{}", i), *r))
                .collect(),
        )
    }

    #[test]
    fn test_all_gap_column_is_blank() {
        let aln = alignment(&["-A", "-C", ".G", "-T"]);
        let track = DensityTrack::new(&aln);
        // first column: pc = 1.0 > 0.89 -> blank; second: pc = 0 -> full
        assert_eq!(track.glyph_row(), " █");
    }

    #[test]
    fn test_half_gap_column() {
        // pc = 0.5 is strictly greater than 0.44, not 0.55: bucket 4
        assert_eq!(DensityTrack::bucket(0.5), 4);
        let aln = alignment(&["A", "-", "C", "."]);
        let track = DensityTrack::new(&aln);
        assert_eq!(track.glyph_row(), "▄");
    }

    #[test]
    fn test_boundary_falls_to_denser_bucket() {
        // exact thresholds are not strictly greater, so they take the next
        // (denser) bucket
        assert_eq!(DensityTrack::bucket(0.89), 1);
        assert_eq!(DensityTrack::bucket(0.11), 8);
        assert_eq!(DensityTrack::bucket(0.90), 0);
    }

    #[test]
    fn test_bucket_monotonic_in_gap_fraction() {
        let mut last = DensityTrack::bucket(1.0);
        let mut pc = 1.0;
        while pc > 0.0 {
            let b = DensityTrack::bucket(pc);
            assert!(b >= last);
            last = b;
            pc -= 0.01;
        }
        assert_eq!(DensityTrack::bucket(0.0), 8);
    }

    #[test]
    fn test_ruler_short_alignment() {
        assert_eq!(ruler_string(5), "1    ");
        assert_eq!(ruler_string(0), "");
    }

    #[test]
    fn test_ruler_marks_tens() {
        let ruler = ruler_string(25);
        assert_eq!(ruler.len(), 25);
        assert_eq!(&ruler[0..1], "1");
        assert_eq!(&ruler[9..11], "10");
        assert_eq!(&ruler[19..21], "20");
    }

    #[test]
    fn test_ruler_clips_label_at_edge() {
        // "10" would need columns 10-11; at width 10 it does not fit
        let ruler = ruler_string(10);
        assert_eq!(ruler, "1         ");
    }
}
