//! The huffman module builds the code huffcode uses to translate symbols into bits.
//!
//! The tree is built greedily: the two lightest trees in the forest are merged until only
//! one is left. Equal weights are broken by the order in which trees entered the forest,
//! so the exact codes (not just their lengths) are reproducible from run to run.
//!
//! Merging is inherently sequential, each step depends on the forest the previous one
//! left behind, and does not benefit from multithreading.
//!
pub mod code_table;
pub mod tree;
