use log::info;
use std::fmt::Debug;
use std::hash::Hash;

use crate::bitstream::bitstring::BitString;
use crate::error::Result;
use crate::huffman_coding::code_table::{build_code_table, CodeTable};
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::FrequencyTable;
use crate::tools::geometry::GridSize;

/// Everything one encoding run produces, kept together for callers that want more
/// than the bits: the frequency table, the code table, the output and its grid size.
#[derive(Debug, Clone)]
pub struct EncodeReport<S: Eq + Hash> {
    pub frequencies: FrequencyTable<S>,
    pub codes: CodeTable<S>,
    pub bits: BitString,
    pub grid: GridSize,
}

impl<S> EncodeReport<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Run the whole pipeline over the input.
    pub fn new(input: &[S]) -> Result<Self> {
        let frequencies = FrequencyTable::from_symbols(input.iter().cloned());
        let root = build_tree(&frequencies)?;
        let codes = build_code_table(&root);
        let bits = super::encode::encode_with_table(&codes, input)?;
        let grid = GridSize::for_bits(bits.len());
        info!(
            "Encoded {} symbols ({} distinct) into {} bits, grid {}x{}",
            frequencies.total(),
            frequencies.len(),
            bits.len(),
            grid.columns,
            grid.rows
        );
        Ok(Self {
            frequencies,
            codes,
            bits,
            grid,
        })
    }

    /// Length of the input.
    pub fn input_symbols(&self) -> usize {
        self.frequencies.total()
    }

    /// Sum over symbols of count * code length. Always equal to `bits.len()`.
    pub fn weighted_length(&self) -> usize {
        self.frequencies
            .iter()
            .map(|(s, f)| f * self.codes.get(s).map_or(0, str::len))
            .sum()
    }

    /// Average code length per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        self.bits.len() as f64 / self.input_symbols() as f64
    }

    /// (symbol, count, code) rows in first-seen order.
    pub fn rows(&self) -> Vec<(&S, usize, &str)> {
        self.frequencies
            .iter()
            .map(|(s, f)| (s, f, self.codes.get(s).unwrap_or("")))
            .collect()
    }
}

impl EncodeReport<char> {
    /// Run the whole pipeline over the chars of a string.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(&text.chars().collect::<Vec<char>>())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    #[test]
    fn report_test() {
        let report = EncodeReport::from_text("abracadabra").unwrap();
        assert_eq!(report.input_symbols(), 11);
        assert_eq!(report.bits.len(), 23);
        assert_eq!(report.weighted_length(), 23);
        assert_eq!(report.grid, GridSize { columns: 5, rows: 4 });
        assert!((report.bits_per_symbol() - 23.0 / 11.0).abs() < 1e-12);
        let rows = report.rows();
        assert_eq!(rows[0], (&'a', 5, "0"));
        assert_eq!(rows[1], (&'b', 2, "110"));
    }

    #[test]
    fn report_empty_test() {
        assert!(matches!(
            EncodeReport::from_text(""),
            Err(Error::InvalidInput(_))
        ));
    }
}
