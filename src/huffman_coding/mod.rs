//! The huffman_coding module builds the static prefix code for one intensity
//! distribution and measures how good that code is.
//!
//! Construction follows the classic greedy algorithm. Every symbol with a
//! nonzero count becomes a weighted leaf, and the two lightest nodes are
//! merged until a single root remains. Walking the finished tree yields one
//! prefix-free bit string per symbol.
//!
//! Ties between equal weights are broken deterministically (see huffman.rs),
//! so two runs over the same input always produce the same tree, the same
//! codes and a byte-identical exported table.
//!
//! The parts are:
//! - huffman: Tree nodes and min-heap tree construction.
//! - code_table: Per-symbol codes derived from the tree, and the persisted table.
//! - stats: Entropy, expected code length and their ratio.
//!
pub mod code_table;
pub mod huffman;
pub mod stats;
