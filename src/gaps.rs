//! Gap-run re-segmentation.
//!
//! Alignment files mix two gap characters, `-` and `.`, sometimes within a
//! single row. Before a row is drawn, its gap characters are re-segmented
//! into maximal runs of a single kind, and each run is rewritten according
//! to the display policy:
//!
//! - `preserve_gaps == false` (default): every gap run is rendered as `.`,
//!   the canonical gap glyph.
//! - `preserve_gaps == true`: hyphen runs keep their `-` characters; dot
//!   runs stay `.` either way.
//!
//! The scan is a single pass over the row with two run counters, at most
//! one of which may be open at a time. A transition between gap kinds
//! flushes the old run before the new one starts; it never extends it.

use thiserror::Error;

/// Internal-consistency failure of the run scanner.
///
/// Both run kinds open at once is unreachable by construction; if it is
/// ever observed the render pass must abort rather than emit corrupt rows.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GapRunError {
    #[error("gap run scanner corrupt: hyphen and dot runs both open (hyphen={hyphen}, dot={dot})")]
    ConflictingRuns { hyphen: usize, dot: usize },
}

/// Rewrites one alignment row for display, normalizing gap runs.
///
/// The output always has the same length as the input and agrees with it
/// at every non-gap position.
pub fn resegment(row: &str, preserve_gaps: bool) -> Result<String, GapRunError> {
    let mut out = String::with_capacity(row.len());
    let mut hyphen_run = 0usize; // open run of '-'
    let mut dot_run = 0usize; // open run of '.'

    for c in row.chars() {
        match c {
            '-' if dot_run == 0 => hyphen_run += 1,
            '.' if hyphen_run == 0 => dot_run += 1,
            '-' => {
                // run of '.'s changes to run of '-'s
                flush_dots(&mut out, &mut dot_run);
                hyphen_run = 1;
            }
            '.' => {
                // run of '-'s changes to run of '.'s
                flush_hyphens(&mut out, &mut hyphen_run, preserve_gaps);
                dot_run = 1;
            }
            _ => {
                if hyphen_run != 0 && dot_run != 0 {
                    return Err(GapRunError::ConflictingRuns {
                        hyphen: hyphen_run,
                        dot: dot_run,
                    });
                }
                flush_hyphens(&mut out, &mut hyphen_run, preserve_gaps);
                flush_dots(&mut out, &mut dot_run);
                out.push(c);
            }
        }
    }

    // Trailing run
    if hyphen_run != 0 && dot_run != 0 {
        return Err(GapRunError::ConflictingRuns {
            hyphen: hyphen_run,
            dot: dot_run,
        });
    }
    flush_hyphens(&mut out, &mut hyphen_run, preserve_gaps);
    flush_dots(&mut out, &mut dot_run);

    Ok(out)
}

fn flush_hyphens(out: &mut String, run: &mut usize, preserve_gaps: bool) {
    let glyph = if preserve_gaps { '-' } else { '.' };
    for _ in 0..*run {
        out.push(glyph);
    }
    *run = 0;
}

fn flush_dots(out: &mut String, run: &mut usize) {
    for _ in 0..*run {
        out.push('.');
    }
    *run = 0;
}

/// Returns true for the two gap characters.
pub fn is_gap(c: char) -> bool {
    c == '-' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_run_collapses_to_dots() {
        assert_eq!(resegment("AC--..GT", false).unwrap(), "AC....GT");
    }

    #[test]
    fn test_mixed_run_preserved() {
        assert_eq!(resegment("AC--..GT", true).unwrap(), "AC--..GT");
    }

    #[test]
    fn test_length_and_residues_unchanged() {
        let row = "MK..--LW-.X--";
        for preserve in [false, true] {
            let out = resegment(row, preserve).unwrap();
            assert_eq!(out.len(), row.len());
            for (a, b) in row.chars().zip(out.chars()) {
                if !is_gap(a) {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(resegment("", false).unwrap(), "");
        assert_eq!(resegment("", true).unwrap(), "");
    }

    #[test]
    fn test_trailing_hyphen_run() {
        assert_eq!(resegment("AC---", false).unwrap(), "AC...");
        assert_eq!(resegment("AC---", true).unwrap(), "AC---");
    }

    #[test]
    fn test_all_gaps() {
        assert_eq!(resegment("--..--", false).unwrap(), "......");
        assert_eq!(resegment("--..--", true).unwrap(), "--..--");
    }

    #[test]
    fn test_dot_to_hyphen_transition() {
        // dot run flushes before the hyphen run opens; lengths stay separate
        assert_eq!(resegment("..---", true).unwrap(), "..---");
        assert_eq!(resegment("..---", false).unwrap(), ".....");
    }

    #[test]
    fn test_no_gaps_is_identity() {
        assert_eq!(resegment("ACGT", false).unwrap(), "ACGT");
        assert_eq!(resegment("acgt", true).unwrap(), "acgt");
    }

    #[test]
    fn test_idempotent() {
        let row = "a.-b--.c";
        let once = resegment(row, false).unwrap();
        let twice = resegment(&once, false).unwrap();
        assert_eq!(once, twice);
        assert_eq!(resegment(row, false).unwrap(), once);
    }

    #[test]
    fn test_unrecognized_symbols_pass_through() {
        assert_eq!(resegment("A?*-Z", false).unwrap(), "A?*.Z");
    }
}
