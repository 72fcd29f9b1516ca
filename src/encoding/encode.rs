use log::{debug, info};
use std::fmt::Debug;
use std::hash::Hash;

use crate::bitstream::bitstring::BitString;
use crate::error::{Error, Result};
use crate::huffman_coding::code_table::{build_code_table, CodeTable};
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::FrequencyTable;

/// Translate the input into bits using a code table, one code per symbol in input order.
///
/// Fails with `Error::Lookup` on the first symbol the table has no code for. Nothing
/// is returned for the symbols before it.
pub fn encode_with_table<S>(codes: &CodeTable<S>, input: &[S]) -> Result<BitString>
where
    S: Eq + Hash + Debug,
{
    // Size the output up front. A missing symbol is reported in the loop below.
    let capacity = input
        .iter()
        .map(|s| codes.get(s).map_or(0, str::len))
        .sum();
    let mut bits = BitString::with_capacity(capacity);

    for sym in input {
        let code = codes.get(sym).ok_or_else(|| Error::Lookup {
            symbol: format!("{:?}", sym),
        })?;
        bits.push_code(code);
    }
    Ok(bits)
}

/// Huffman-encode a sequence of symbols: count, build the tree, derive the codes and
/// translate. An empty input is `Error::InvalidInput`.
pub fn encode<S>(input: &[S]) -> Result<BitString>
where
    S: Eq + Hash + Clone + Debug,
{
    let freqs = FrequencyTable::from_symbols(input.iter().cloned());
    debug!(
        "Counted {} symbols, {} distinct",
        freqs.total(),
        freqs.len()
    );
    let root = build_tree(&freqs)?;
    let codes = build_code_table(&root);
    let bits = encode_with_table(&codes, input)?;
    info!("Encoded {} symbols into {} bits", input.len(), bits.len());
    Ok(bits)
}

/// Huffman-encode a string, one symbol per char.
pub fn encode_str(text: &str) -> Result<BitString> {
    let symbols = text.chars().collect::<Vec<char>>();
    encode(&symbols)
}
