//! Per-sequence and overall ORF reporting.
//!
//! The report lists one line per sequence, in file order, followed by a
//! summary line for the longest ORF across all sequences:
//!
//! ```text
//! Sequence ID: seq1, ORF: ATGAAATAG, Index: (0, 9)
//! Overall longest ORF: ATGAAATAG, Index: (0, 9)
//! ```
//!
//! Sequences without an ORF are reported with an empty ORF and index `(0, 0)`.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::model::{OrfHit, SequenceCollection};
use crate::orf::find_longest_orf;

/// Longest ORF of a single sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOrf {
    pub id: String,
    pub hit: Option<OrfHit>,
}

impl SequenceOrf {
    /// Length of the ORF, 0 when none was found.
    pub fn orf_len(&self) -> usize {
        self.hit.as_ref().map_or(0, OrfHit::len)
    }
}

/// Longest ORFs of every sequence in a collection.
#[derive(Debug, Clone, Default)]
pub struct OrfReport {
    results: Vec<SequenceOrf>,
}

impl OrfReport {
    /// Scans every sequence of `sequences`, preserving their order.
    pub fn from_collection(sequences: &SequenceCollection) -> Self {
        let results: Vec<SequenceOrf> = sequences
            .iter()
            .map(|seq| {
                let hit = find_longest_orf(&seq.data);
                debug!(
                    id = %seq.id,
                    len = seq.len(),
                    orf_len = hit.as_ref().map_or(0, OrfHit::len),
                    "scanned sequence"
                );
                SequenceOrf {
                    id: seq.id.clone(),
                    hit,
                }
            })
            .collect();

        info!(
            sequences = results.len(),
            with_orf = results.iter().filter(|r| r.hit.is_some()).count(),
            "ORF scan complete"
        );
        Self { results }
    }

    /// Per-sequence results in collection order.
    pub fn results(&self) -> &[SequenceOrf] {
        &self.results
    }

    /// Returns true if the report covers no sequence.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The longest ORF over all sequences.
    ///
    /// On equal lengths the sequence appearing first wins.
    pub fn overall(&self) -> Option<&OrfHit> {
        let mut best: Option<&OrfHit> = None;
        for hit in self.results.iter().filter_map(|r| r.hit.as_ref()) {
            if best.map_or(true, |b| hit.len() > b.len()) {
                best = Some(hit);
            }
        }
        best
    }

    /// Writes the report, one line per sequence then the overall line.
    ///
    /// With `show_length`, each line also carries the ORF length.
    pub fn write_to<W: Write>(&self, out: &mut W, show_length: bool) -> io::Result<()> {
        for result in &self.results {
            writeln!(
                out,
                "Sequence ID: {}, ORF: {}",
                result.id,
                OrfDisplay::new(result.hit.as_ref(), show_length)
            )?;
        }
        writeln!(
            out,
            "Overall longest ORF: {}",
            OrfDisplay::new(self.overall(), show_length)
        )
    }
}

/// Formats `<orf>[, Length: <n>], Index: (<start>, <end>)`.
struct OrfDisplay<'a> {
    hit: Option<&'a OrfHit>,
    show_length: bool,
}

impl<'a> OrfDisplay<'a> {
    fn new(hit: Option<&'a OrfHit>, show_length: bool) -> Self {
        Self { hit, show_length }
    }
}

impl std::fmt::Display for OrfDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (orf, (start, end)) = match self.hit {
            Some(hit) => (hit.sequence.as_str(), hit.span()),
            None => ("", (0, 0)),
        };
        write!(f, "{}", orf)?;
        if self.show_length {
            write!(f, ", Length: {}", orf.len())?;
        }
        write!(f, ", Index: ({}, {})", start, end)
    }
}
