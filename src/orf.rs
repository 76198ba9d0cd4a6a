//! Longest open reading frame search.
//!
//! An ORF starts at an `ATG` codon and runs, codon by codon in the frame of
//! that start codon, up to and including the first in-frame stop codon
//! (`TAG`, `TGA` or `TAA`). Starts without an in-frame stop produce no ORF.
//!
//! Matching is exact and case-sensitive: `atg` is not a start codon.

use crate::model::OrfHit;

/// The start codon.
pub const START_CODON: &[u8; 3] = b"ATG";

/// The stop codons.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAG", b"TGA", b"TAA"];

/// Returns true if `codon` is the start codon.
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

/// Returns true if `codon` is one of the stop codons.
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}

/// Returns the end (exclusive) of the ORF starting at `start`, i.e. one past
/// the first in-frame stop codon, if there is one.
fn orf_end(seq: &[u8], start: usize) -> Option<usize> {
    (start + 3..)
        .step_by(3)
        .take_while(|&pos| pos + 3 <= seq.len())
        .find(|&pos| is_stop_codon(&seq[pos..pos + 3]))
        .map(|pos| pos + 3)
}

/// Finds the longest ORF in `sequence`.
///
/// Every `ATG` is tried as a start, overlapping ones included. When several
/// ORFs share the maximal length, the one with the smallest start wins.
/// Returns `None` when no start codon is followed by an in-frame stop.
///
/// # Examples
///
/// ```
/// use orfscan::orf::find_longest_orf;
///
/// let hit = find_longest_orf("ATGAAATAGCCC").unwrap();
/// assert_eq!(hit.sequence, "ATGAAATAG");
/// assert_eq!(hit.span(), (0, 9));
///
/// assert!(find_longest_orf("GGGGGG").is_none());
/// ```
pub fn find_longest_orf(sequence: &str) -> Option<OrfHit> {
    let seq = sequence.as_bytes();
    let mut best: Option<(usize, usize)> = None;

    for start in 0..seq.len().saturating_sub(2) {
        if !is_start_codon(&seq[start..start + 3]) {
            continue;
        }
        let Some(end) = orf_end(seq, start) else {
            continue;
        };
        let longer = match best {
            Some((best_start, best_end)) => end - start > best_end - best_start,
            None => true,
        };
        if longer {
            best = Some((start, end));
        }
    }

    // Codon boundaries are ASCII, so the span is valid for slicing `sequence`.
    best.map(|(start, end)| OrfHit::from_range(sequence, start..end))
}
