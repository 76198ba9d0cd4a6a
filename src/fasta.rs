//! FASTA file reader.
//!
//! This module reads FASTA files into an ordered [`SequenceCollection`].
//! Multi-line sequences are concatenated verbatim after trimming each line.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier
//! ATGAAATAG...
//! >another_sequence
//! CCCATGTGA...
//! ```
//!
//! ## Record boundaries
//!
//! A record is committed when the next header starts, as long as its
//! identifier is non-empty, even if no sequence line followed it. The last
//! record of the input is only kept when it has sequence data. Lines before
//! the first header are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Sequence, SequenceCollection};

/// Errors that can occur while reading a FASTA file.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA input: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Reads a FASTA file into a sequence collection.
///
/// # Examples
///
/// ```no_run
/// use orfscan::fasta::read_fasta_file;
///
/// let sequences = read_fasta_file("genes.fasta").unwrap();
/// println!("Loaded {} sequences", sequences.sequence_count());
/// ```
pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<SequenceCollection> {
    let file = File::open(&path)?;
    debug!(path = %path.as_ref().display(), "reading FASTA file");
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA content from a reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<SequenceCollection> {
    let mut sequences = SequenceCollection::new();
    let mut current_id = String::new();
    let mut current_seq = String::new();
    let mut in_record = false;

    for line_result in reader.lines() {
        let line = line_result?;
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            if !current_id.is_empty() {
                commit(
                    &mut sequences,
                    std::mem::take(&mut current_id),
                    std::mem::take(&mut current_seq),
                );
            }
            current_id = header.to_string();
            current_seq.clear();
            in_record = true;
        } else if in_record {
            current_seq.push_str(line);
        } else if !line.is_empty() {
            debug!(line, "ignoring sequence data before the first header");
        }
    }

    if !current_id.is_empty() {
        if current_seq.is_empty() {
            debug!(id = %current_id, "dropping trailing record without sequence data");
        } else {
            commit(&mut sequences, current_id, current_seq);
        }
    }

    debug!(count = sequences.sequence_count(), "parsed FASTA records");
    Ok(sequences)
}

/// Parses FASTA content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_fasta_str(content: &str) -> FastaResult<SequenceCollection> {
    parse_fasta(content.as_bytes())
}

fn commit(sequences: &mut SequenceCollection, id: String, data: String) {
    if sequences.insert(Sequence::new(id.clone(), data)).is_some() {
        warn!(id = %id, "duplicate sequence identifier, keeping the last record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ids(sequences: &SequenceCollection) -> Vec<&str> {
        sequences.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_parse_simple_fasta() {
        let content = ">seq1\nACGT\n>seq2\nTGCA\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.sequence_count(), 2);
        assert_eq!(sequences.get(0).unwrap().id, "seq1");
        assert_eq!(sequences.get(0).unwrap().data, "ACGT");
        assert_eq!(sequences.get(1).unwrap().id, "seq2");
        assert_eq!(sequences.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let content = ">seq1\nACGT\nTGCA\nAAAA\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.sequence_count(), 1);
        assert_eq!(sequences.get(0).unwrap().data, "ACGTTGCAAAAA");
    }

    #[test]
    fn test_header_keeps_full_line() {
        let content = ">seq1 some description  \nACGT\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.get(0).unwrap().id, "seq1 some description");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let content = "  >seq1\r\n  ACG \r\n\tT\r\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.get(0).unwrap().id, "seq1");
        assert_eq!(sequences.get(0).unwrap().data, "ACGT");
    }

    #[test]
    fn test_parse_with_empty_lines() {
        let content = ">seq1\nACGT\n\n>seq2\n\nTGCA\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.sequence_count(), 2);
        assert_eq!(sequences.get(0).unwrap().data, "ACGT");
        assert_eq!(sequences.get(1).unwrap().data, "TGCA");
    }

    #[test]
    fn test_empty_input() {
        let sequences = parse_fasta_str("").unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_data_before_first_header_is_ignored() {
        let content = "ACGT\nGGGG\n>seq1\nTGCA\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(ids(&sequences), ["seq1"]);
        assert_eq!(sequences.get(0).unwrap().data, "TGCA");
    }

    #[test]
    fn test_empty_record_mid_file_is_kept() {
        let content = ">empty\n>seq2\nACGT\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(ids(&sequences), ["empty", "seq2"]);
        assert_eq!(sequences.get(0).unwrap().data, "");
    }

    #[test]
    fn test_empty_record_at_end_is_dropped() {
        let content = ">seq1\nACGT\n>trailing\n\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(ids(&sequences), ["seq1"]);
    }

    #[test]
    fn test_record_with_empty_identifier_is_skipped() {
        let content = ">\nACGT\n>seq2\nTTTT\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(ids(&sequences), ["seq2"]);
        assert_eq!(sequences.get(0).unwrap().data, "TTTT");
    }

    #[test]
    fn test_duplicate_identifier_last_wins() {
        let content = ">a\nAAA\n>b\nCCC\n>a\nGGG\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(ids(&sequences), ["a", "b"]);
        assert_eq!(sequences.get_by_id("a").unwrap().data, "GGG");
    }

    #[test]
    fn test_case_preservation() {
        let content = ">seq1\nacgtACGT\n";
        let sequences = parse_fasta_str(content).unwrap();
        assert_eq!(sequences.get(0).unwrap().data, "acgtACGT");
    }

    #[test]
    fn test_read_fasta_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">seq1\nATGAAA\nTAG\n>seq2\nCCC\n").unwrap();

        let sequences = read_fasta_file(file.path()).unwrap();
        assert_eq!(ids(&sequences), ["seq1", "seq2"]);
        assert_eq!(sequences.get(0).unwrap().data, "ATGAAATAG");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_fasta_file(dir.path().join("missing.fasta"));
        assert!(matches!(result, Err(FastaError::IoError(_))));
    }
}
