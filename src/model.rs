//! Data model for the alignment viewer.
//!
//! This module contains the structures describing what is being viewed:
//! sequences, the alignment as a whole, and the alphabet it is written in.
//! Scroll state lives in [`crate::viewer`], not here.

/// Represents a single aligned sequence with its identifier and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The sequence identifier (from FASTA header, without '>')
    pub id: String,
    /// The aligned sequence data (residues and gap characters)
    pub data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The kind of data in an alignment; controls which residue colour table
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Nucleotide,
    AminoAcid,
}

/// A rectangular multiple sequence alignment.
///
/// Invariant: every sequence has length `align_width`. The parser enforces
/// this before an `Alignment` is constructed; the viewer relies on it.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// All sequences in the alignment, in file order
    pub sequences: Vec<Sequence>,
    /// Number of columns shared by every sequence
    align_width: usize,
}

impl Alignment {
    /// Creates a new alignment from equal-length sequences.
    pub fn new(sequences: Vec<Sequence>) -> Self {
        let align_width = sequences.first().map_or(0, Sequence::len);
        debug_assert!(sequences.iter().all(|s| s.len() == align_width));
        Self {
            sequences,
            align_width,
        }
    }

    /// Returns the number of sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Returns the number of columns in the alignment.
    pub fn align_width(&self) -> usize {
        self.align_width
    }

    /// Returns the length of the longest sequence identifier.
    pub fn max_id_length(&self) -> usize {
        self.sequences.iter().map(|s| s.id.len()).max().unwrap_or(0)
    }

    /// Gets a sequence by index.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Returns true if the alignment has no sequences.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Guesses whether this is a nucleotide or amino acid alignment by
    /// inspecting the first sequence: DNA/RNA letters, N, and gap
    /// characters only means nucleotide.
    pub fn guess_alphabet(&self) -> Alphabet {
        let nucleotide = self
            .sequences
            .first()
            .map(|s| {
                s.data.chars().all(|c| {
                    matches!(
                        c.to_ascii_uppercase(),
                        'A' | 'C' | 'G' | 'T' | 'U' | 'N' | '-' | '.'
                    )
                })
            })
            .unwrap_or(false);
        if nucleotide {
            Alphabet::Nucleotide
        } else {
            Alphabet::AminoAcid
        }
    }
}
