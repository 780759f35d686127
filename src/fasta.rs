//! FASTA file parser.
//!
//! Reads FASTA alignments, single-line or multi-line sequences, and
//! enforces the rectangularity the viewer relies on: every sequence must
//! have the same length.
//!
//! ```text
//! >sequence_identifier optional description
//! ACGT-CGTAC.T...
//! >another_sequence
//! TGCATGC--GCA...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::model::{Alignment, Sequence};

/// Errors that can occur while reading an alignment.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to open file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),

    #[error("Sequences have different lengths (min: {min}, max: {max}): not an alignment")]
    RaggedAlignment { min: usize, max: usize },
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file and returns a rectangular Alignment.
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Alignment> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_fasta(reader)
}

/// Parses FASTA content from a reader.
///
/// Handles both single-line and multi-line sequences; whitespace inside
/// sequence lines is discarded.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Alignment> {
    let mut sequences = Vec::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();
    let mut line_number = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                if !current_seq.is_empty() {
                    sequences.push(Sequence::new(id, std::mem::take(&mut current_seq)));
                }
            }

            // Everything after '>' up to the first space is the id
            let id = header
                .split_whitespace()
                .next()
                .unwrap_or(header)
                .to_string();

            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }

            current_id = Some(id);
            current_seq.clear();
        } else {
            if current_id.is_none() {
                return Err(FastaError::SequenceWithoutHeader(line_number));
            }
            current_seq.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(id) = current_id {
        if !current_seq.is_empty() {
            sequences.push(Sequence::new(id, current_seq));
        }
    }

    if sequences.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    let min = sequences.iter().map(Sequence::len).min().unwrap_or(0);
    let max = sequences.iter().map(Sequence::len).max().unwrap_or(0);
    if min != max {
        return Err(FastaError::RaggedAlignment { min, max });
    }

    Ok(Alignment::new(sequences))
}

/// Parses FASTA content from a string. Useful for tests and in-memory data.
pub fn parse_fasta_str(content: &str) -> FastaResult<Alignment> {
    parse_fasta(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_fasta() {
        let alignment = parse_fasta_str(">seq1\nACGT\n>seq2\nTGCA\n").unwrap();
        assert_eq!(alignment.sequence_count(), 2);
        assert_eq!(alignment.get(0).unwrap().id, "seq1");
        assert_eq!(alignment.get(0).unwrap().data, "ACGT");
        assert_eq!(alignment.get(1).unwrap().id, "seq2");
        assert_eq!(alignment.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let alignment = parse_fasta_str(">seq1\nACGT\nTGCA\nAAAA\n").unwrap();
        assert_eq!(alignment.sequence_count(), 1);
        assert_eq!(alignment.get(0).unwrap().data, "ACGTTGCAAAAA");
    }

    #[test]
    fn test_parse_with_description() {
        let alignment = parse_fasta_str(">seq1 This is a description\nACGT\n").unwrap();
        assert_eq!(alignment.get(0).unwrap().id, "seq1");
    }

    #[test]
    fn test_parse_with_empty_lines() {
        let alignment = parse_fasta_str(">seq1\nACGT\n\n>seq2\n\nTGCA\n").unwrap();
        assert_eq!(alignment.sequence_count(), 2);
        assert_eq!(alignment.get(0).unwrap().data, "ACGT");
        assert_eq!(alignment.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse_fasta_str(""), Err(FastaError::EmptyFile)));
    }

    #[test]
    fn test_sequence_without_header() {
        let result = parse_fasta_str("ACGT\n>seq1\nTGCA\n");
        assert!(matches!(result, Err(FastaError::SequenceWithoutHeader(1))));
    }

    #[test]
    fn test_ragged_alignment_rejected() {
        let result = parse_fasta_str(">seq1\nACGT\n>seq2\nTG\n");
        assert!(matches!(
            result,
            Err(FastaError::RaggedAlignment { min: 2, max: 4 })
        ));
    }

    #[test]
    fn test_gap_characters_kept() {
        let alignment = parse_fasta_str(">seq1\nAC--..GT\n>seq2\nacgt.-ac\n").unwrap();
        assert_eq!(alignment.get(0).unwrap().data, "AC--..GT");
        // case preserved as-is
        assert_eq!(alignment.get(1).unwrap().data, "acgt.-ac");
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">seq1\nAC-T\n>seq2\nA..T\n").unwrap();
        let alignment = parse_fasta_file(file.path()).unwrap();
        assert_eq!(alignment.sequence_count(), 2);
        assert_eq!(alignment.align_width(), 4);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            parse_fasta_file("/no/such/file.fasta"),
            Err(FastaError::IoError(_))
        ));
    }
}
