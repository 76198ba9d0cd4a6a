//! # orfscan - Longest ORF finder
//!
//! Reads nucleotide sequences from a FASTA file and reports, for each of
//! them, the longest open reading frame on the forward strand, plus the
//! longest one over the whole file.
//!
//! ## Architecture
//!
//! - `model`: Sequences, the ordered sequence collection, and ORF hits
//! - `fasta`: FASTA file reading
//! - `orf`: Longest ORF search within a single sequence
//! - `report`: Per-sequence scan, overall maximum, and text output
//! - `logging`: Tracing subscriber setup for the binary

pub mod fasta;
pub mod logging;
pub mod model;
pub mod orf;
pub mod report;
