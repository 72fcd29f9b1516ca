//! The encoding module runs the whole pipeline: count the symbols, build the Huffman
//! tree, derive the code table and translate the input into bits.
//!
//! Every run is synchronous and owns its own table, tree and codes, so independent
//! inputs can be encoded from as many threads as the caller likes.
//!
pub mod encode;
pub mod report;
