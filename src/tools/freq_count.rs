use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Occurrence counts for every distinct symbol of an input.
///
/// Symbols are kept in the order they were first seen. The tree builder uses that
/// order to rank leaves of equal weight, so two runs over the same input always
/// produce the same codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Eq + Hash> {
    /// (symbol, count) in first-seen order.
    entries: Vec<(S, usize)>,
    /// Position of each symbol in `entries`.
    index: FxHashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    /// Count the symbols of the input in a single pass.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut entries: Vec<(S, usize)> = Vec::new();
        let mut index: FxHashMap<S, usize> = FxHashMap::default();
        for sym in symbols {
            match index.get(&sym) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(sym.clone(), entries.len());
                    entries.push((sym, 1));
                }
            }
        }
        Self { entries, index }
    }

    /// Count of the symbol, or None if it never appeared.
    pub fn get(&self, sym: &S) -> Option<usize> {
        self.index.get(sym).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, which is the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, f)| f).sum()
    }

    /// Iterate (symbol, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(s, f)| (s, *f))
    }
}

/// Returns a frequency count of the characters of a string.
pub fn freq_count(text: &str) -> FrequencyTable<char> {
    FrequencyTable::from_symbols(text.chars())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_test() {
        let freqs = freq_count("abracadabra");
        assert_eq!(freqs.len(), 5);
        assert_eq!(freqs.get(&'a'), Some(5));
        assert_eq!(freqs.get(&'b'), Some(2));
        assert_eq!(freqs.get(&'r'), Some(2));
        assert_eq!(freqs.get(&'c'), Some(1));
        assert_eq!(freqs.get(&'d'), Some(1));
        assert_eq!(freqs.get(&'z'), None);
        assert_eq!(freqs.total(), 11);
    }

    #[test]
    fn first_seen_order_test() {
        let freqs = freq_count("cabbac");
        let order = freqs.iter().map(|(&s, _)| s).collect::<String>();
        assert_eq!(order, "cab");
    }

    #[test]
    fn empty_test() {
        let freqs = freq_count("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
    }

    #[test]
    fn non_char_symbols_test() {
        let freqs = FrequencyTable::from_symbols(vec![7_u16, 3, 7, 7]);
        assert_eq!(freqs.get(&7), Some(3));
        assert_eq!(freqs.get(&3), Some(1));
    }
}
