use log::{debug, trace};

use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}

#[derive(Debug, Clone)]
pub struct Node<S> {
    /// Sum of the counts of every leaf below (and including) this node.
    pub weight: usize,
    /// Height of the subtree, 0 for a leaf.
    pub depth: usize,
    /// Rank among nodes of equal weight. Leaves take their first-seen position,
    /// merged nodes take the next free rank when they are created.
    pub seq: usize,
    pub node_data: NodeData<S>,
}

impl<S> Node<S> {
    /// Create a new node
    pub fn new(weight: usize, depth: usize, seq: usize, node_data: NodeData<S>) -> Node<S> {
        Node {
            weight,
            depth,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Join two trees. `left` is the one taken first from the forest.
    fn merge(left: Node<S>, right: Node<S>, seq: usize) -> Node<S> {
        Node::new(
            left.weight + right.weight,
            left.depth.max(right.depth) + 1,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        )
    }
}

// Nodes compare by (weight, seq) only. The order is reversed so that a BinaryHeap
// pops the lightest node first, and the lowest rank among equal weights.
impl<S> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<S> Eq for Node<S> {}

impl<S> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<S> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table and return its root.
///
/// The two lightest trees are merged until one is left. Ties go to the tree that
/// entered the forest first: leaves in first-seen order, then merged trees in the
/// order they were made. This gives the same result as stable-sorting the forest by
/// weight before every merge and taking the first two, with the merged tree appended
/// at the end.
///
/// A table with one symbol returns a bare leaf. An empty table is an error.
pub fn build_tree<S>(freqs: &FrequencyTable<S>) -> Result<Node<S>>
where
    S: Eq + Hash + Clone + Debug,
{
    if freqs.is_empty() {
        return Err(Error::InvalidInput("frequency table is empty"));
    }

    let mut forest: BinaryHeap<Node<S>> = freqs
        .iter()
        .enumerate()
        .map(|(i, (sym, f))| Node::new(f, 0, i, NodeData::Leaf(sym.clone())))
        .collect();

    let mut next_seq = forest.len();
    let mut merges = 0;
    // Pare the forest down to one node.
    while forest.len() > 1 {
        if let (Some(left), Some(right)) = (forest.pop(), forest.pop()) {
            trace!(
                "merge #{}: weight {} (rank {}) + weight {} (rank {})",
                merges,
                left.weight,
                left.seq,
                right.weight,
                right.seq
            );
            forest.push(Node::merge(left, right, next_seq));
            next_seq += 1;
            merges += 1;
        }
    }

    let root = forest
        .pop()
        .ok_or(Error::InvalidInput("frequency table is empty"))?;
    debug!(
        "Huffman tree built: {} symbols, {} merges, depth {}, weight {}",
        freqs.len(),
        merges,
        root.depth,
        root.weight
    );
    Ok(root)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freq_count;

    fn leaf_symbol(node: &Node<char>) -> char {
        match node.node_data {
            NodeData::Leaf(s) => s,
            NodeData::Kids(..) => panic!("expected a leaf"),
        }
    }

    fn kids(node: &Node<char>) -> (&Node<char>, &Node<char>) {
        match &node.node_data {
            NodeData::Kids(l, r) => (&**l, &**r),
            NodeData::Leaf(_) => panic!("expected an internal node"),
        }
    }

    #[test]
    fn two_symbols_test() {
        let root = build_tree(&freq_count("aab")).unwrap();
        assert_eq!(root.weight, 3);
        assert_eq!(root.depth, 1);
        let (left, right) = kids(&root);
        assert_eq!(leaf_symbol(left), 'b');
        assert_eq!(leaf_symbol(right), 'a');
    }

    #[test]
    fn single_symbol_test() {
        let root = build_tree(&freq_count("zzzz")).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.weight, 4);
        assert_eq!(root.depth, 0);
    }

    #[test]
    fn empty_table_test() {
        let result = build_tree(&freq_count(""));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn equal_weight_leaves_keep_first_seen_order_test() {
        // All weights equal: a+b merge first, then c+d, then the two pairs.
        let root = build_tree(&freq_count("abcd")).unwrap();
        let (left, right) = kids(&root);
        let (ll, lr) = kids(left);
        let (rl, rr) = kids(right);
        assert_eq!(
            [leaf_symbol(ll), leaf_symbol(lr), leaf_symbol(rl), leaf_symbol(rr)],
            ['a', 'b', 'c', 'd']
        );
    }

    #[test]
    fn leaf_wins_tie_against_merged_node_test() {
        // b and c (1 each) merge into weight 2, which ties with a (2).
        // a entered the forest first so it becomes the left child.
        let root = build_tree(&freq_count("aabc")).unwrap();
        let (left, right) = kids(&root);
        assert_eq!(leaf_symbol(left), 'a');
        let (rl, rr) = kids(right);
        assert_eq!(leaf_symbol(rl), 'b');
        assert_eq!(leaf_symbol(rr), 'c');
    }

    #[test]
    fn heap_pops_lightest_then_lowest_rank_test() {
        let mut heap = BinaryHeap::new();
        heap.push(Node::new(3, 0, 0, NodeData::Leaf('x')));
        heap.push(Node::new(1, 0, 2, NodeData::Leaf('y')));
        heap.push(Node::new(1, 0, 1, NodeData::Leaf('z')));
        let order = std::iter::from_fn(|| heap.pop())
            .map(|n| leaf_symbol(&n))
            .collect::<String>();
        assert_eq!(order, "zyx");
    }
}
