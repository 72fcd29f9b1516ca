//! The tools module provides the helper functions around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface for huffcode.
//! - freq_count: Frequency count of the input symbols.
//! - geometry: Grid size for laying a bit-string out as a square-ish picture.
//!
pub mod cli;
pub mod freq_count;
pub mod geometry;
