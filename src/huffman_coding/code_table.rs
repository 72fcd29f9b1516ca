//! Turns a finished Huffman tree into the symbol -> code lookup table used by the encoder.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::tree::{Node, NodeData};

/// Prefix-free code for every symbol of a tree. Codes are strings of '0' and '1'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    codes: FxHashMap<S, String>,
}

impl<S: Eq + Hash> CodeTable<S> {
    /// Code for the symbol, if the tree had a leaf for it.
    pub fn get(&self, sym: &S) -> Option<&str> {
        self.codes.get(sym).map(String::as_str)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, code) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.codes.iter().map(|(s, c)| (s, c.as_str()))
    }
}

impl<S: Eq + Hash> FromIterator<(S, String)> for CodeTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, String)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Walk the tree from the root and record the path to every leaf: '0' for each step
/// left, '1' for each step right.
///
/// Uses an explicit stack instead of recursion since skewed frequencies make trees
/// as deep as they have symbols. A root that is a leaf gets the code "0".
pub fn build_code_table<S>(root: &Node<S>) -> CodeTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    let mut codes = FxHashMap::default();

    if let NodeData::Leaf(sym) = &root.node_data {
        trace!("{:?} -> 0 (only symbol)", sym);
        codes.insert(sym.clone(), "0".to_string());
        return CodeTable { codes };
    }

    // Each entry owns its own path so siblings never see each other's prefix.
    let mut stack: Vec<(&Node<S>, String)> = vec![(root, String::new())];
    while let Some((node, path)) = stack.pop() {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                let mut right_path = path.clone();
                right_path.push('1');
                let mut left_path = path;
                left_path.push('0');
                // Right goes on first so the left subtree is visited first.
                stack.push((&**right, right_path));
                stack.push((&**left, left_path));
            }
            NodeData::Leaf(sym) => {
                trace!("{:?} -> {}", sym, path);
                codes.insert(sym.clone(), path);
            }
        }
    }

    debug!("Code table built for {} symbols", codes.len());
    CodeTable { codes }
}
