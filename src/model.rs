//! Data model for the ORF scanner.
//!
//! This module contains the data structures shared by the reader, the
//! scanner and the report:
//! - Sequences and the ordered collection read from a FASTA file
//! - ORF hits located inside a sequence

use std::collections::HashMap;
use std::ops::Range;

/// Represents a single sequence with its identifier and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The sequence identifier (from FASTA header, without '>')
    pub id: String,
    /// The nucleotide data, case preserved
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

/// Sequences in file order, addressable by identifier.
///
/// Inserting an identifier that is already present replaces its data but
/// keeps the entry at its original position.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection {
    sequences: Vec<Sequence>,
    positions: HashMap<String, usize>,
}

impl SequenceCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a sequence, returning the data it replaced if the identifier
    /// was already present.
    pub fn insert(&mut self, sequence: Sequence) -> Option<String> {
        match self.positions.get(&sequence.id) {
            Some(&pos) => Some(std::mem::replace(
                &mut self.sequences[pos].data,
                sequence.data,
            )),
            None => {
                self.positions
                    .insert(sequence.id.clone(), self.sequences.len());
                self.sequences.push(sequence);
                None
            }
        }
    }

    /// Returns the number of sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Gets a sequence by position.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Gets a sequence by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<&Sequence> {
        self.positions.get(id).map(|&pos| &self.sequences[pos])
    }

    /// Iterates over sequences in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Sequence> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        let mut collection = Self::new();
        for sequence in iter {
            collection.insert(sequence);
        }
        collection
    }
}

/// An open reading frame found in a sequence.
///
/// `start..end` is the half-open span in the source sequence: `start` is the
/// first base of the start codon, `end` is one past the last base of the
/// stop codon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfHit {
    /// The ORF nucleotides, start and stop codons included
    pub sequence: String,
    pub start: usize,
    pub end: usize,
}

impl OrfHit {
    /// Creates a hit covering `range` of `source`.
    ///
    /// `range` must lie on character boundaries of `source`.
    pub fn from_range(source: &str, range: Range<usize>) -> Self {
        Self {
            sequence: source[range.clone()].to_string(),
            start: range.start,
            end: range.end,
        }
    }

    /// Number of nucleotides in the ORF.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the `(start, end)` pair.
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
