//! Huffman coding of symbol sequences into bit-strings.
//!
//! Version 0.1.0
//!
//! Counts how often each symbol occurs, builds a Huffman tree by repeatedly merging the
//! two lightest trees, derives a prefix-free code from the paths through that tree, and
//! translates the input into the concatenation of its symbols' codes.
//!
//! Ties between equal weights always go to the tree that entered the forest first
//! (leaves in the order their symbols were first seen, merged trees in the order they
//! were made), so the exact bits are reproducible, not just their count.
//!
//! Basic usage from the command line:
//!
//! `$> huffcode -t "abracadabra"`
//!
//! prints `01101110100010101101110`.
//!
//! From Rust:
//!
//! ```
//! let bits = huffcode::encode_str("aab").unwrap();
//! assert_eq!(bits.as_str(), "110");
//! assert_eq!(huffcode::grid_columns(bits.len()), 2);
//! ```
//!
pub mod bitstream;
pub mod encoding;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitstring::BitString;
pub use encoding::encode::{encode, encode_str, encode_with_table};
pub use encoding::report::EncodeReport;
pub use error::{Error, Result};
pub use huffman_coding::code_table::{build_code_table, CodeTable};
pub use huffman_coding::tree::{build_tree, Node, NodeData};
pub use tools::freq_count::{freq_count, FrequencyTable};
pub use tools::geometry::{grid_columns, grid_rows, GridSize};
