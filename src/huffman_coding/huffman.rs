use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::tools::freq_count::Histogram;

/// Children of an internal node, or the symbol at a leaf. An internal node
/// owns its two children outright, so dropping the root tears down the whole
/// tree in one move.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// One node of the code tree.
///
/// `order` makes the heap ordering total. Leaves use their symbol value
/// (0-255), internal nodes are numbered from 256 upward in creation order.
/// No two nodes in a build share an `order`, so equal weights still compare
/// unambiguously and every build of the same histogram merges in the same
/// sequence.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub order: u16,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, order: u16, node_data: NodeData) -> Node {
        Node {
            weight,
            order,
            node_data,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight, then decreasing order, so that the
    /// (max-) BinaryHeap pops the lightest node first and, among equal
    /// weights, the smallest symbol first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the code tree for every symbol present in the histogram.
///
/// Leaf weights are the raw counts rather than normalized probabilities.
/// Dividing every count by the same total cannot change any comparison, and
/// integer weights keep the merge order exact.
///
/// Each round removes the two lightest nodes and pushes their combination
/// back, so an alphabet of size A reaches a single root after exactly A - 1
/// merges. The first node popped becomes the left child and later takes bit
/// 0, the second becomes the right child and takes bit 1.
///
/// A single-symbol alphabet needs no merge at all, its lone leaf is the
/// root. Returns None for an empty histogram.
pub fn build_tree(histogram: &Histogram) -> Option<Node> {
    let mut heap: BinaryHeap<Node> = histogram
        .present()
        .map(|(symbol, count)| Node::new(count, symbol as u16, NodeData::Leaf(symbol)))
        .collect();
    if heap.is_empty() {
        return None;
    }

    let mut next_order = 256_u16;
    while heap.len() > 1 {
        let left = heap.pop().unwrap();
        let right = heap.pop().unwrap();
        heap.push(Node::new(
            left.weight + right.weight,
            next_order,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ));
        next_order += 1;
    }
    Some(heap.pop().unwrap())
}
