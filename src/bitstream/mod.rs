//! The bitstream module holds the encoder's output and the means to write it out.
//!
//! - bitstring: the '0'/'1' string the encoder produces, and the grid renderer consumes.
//! - bitpacker: packs that string eight bits to a byte for writing to a file.
//!
pub mod bitpacker;
pub mod bitstring;
