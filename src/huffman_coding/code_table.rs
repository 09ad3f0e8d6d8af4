use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};

/// The code assigned to one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub length: usize,
    pub bits: String,
}

/// Symbol to code mapping, one entry per leaf of the tree. Iteration order
/// is arbitrary, anything user-visible sorts by symbol first.
pub type CodeTable = FxHashMap<u8, CodeEntry>;

/// Walk the tree and record the path to every leaf. Descending left appends
/// a 0, descending right appends a 1. A tree that is a single leaf gets the
/// empty code of length zero.
///
/// Prefix-freeness needs no separate check. Leaves end every path, so no
/// recorded code can continue into another.
pub fn derive_codes(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();
    let mut path = String::new();
    record_codes(root, &mut path, &mut table);
    table
}

fn record_codes(node: &Node, path: &mut String, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(
                *symbol,
                CodeEntry {
                    length: path.len(),
                    bits: path.clone(),
                },
            );
        }
        NodeData::Kids(left, right) => {
            path.push('0');
            record_codes(left, path, table);
            path.pop();
            path.push('1');
            record_codes(right, path, table);
            path.pop();
        }
    }
}

/// The table rows sorted by ascending symbol value.
pub fn sorted_rows(table: &CodeTable) -> Vec<(u8, &CodeEntry)> {
    let mut rows: Vec<(u8, &CodeEntry)> = table.iter().map(|(&symbol, entry)| (symbol, entry)).collect();
    rows.sort_unstable_by_key(|&(symbol, _)| symbol);
    rows
}

/// Render the table in its persisted form: a two line header, then one row
/// per symbol with the value, the code length and the code itself in fixed
/// right-aligned columns.
pub fn format_code_table(table: &CodeTable) -> String {
    let mut text = String::new();
    text.push_str("Pixel Value | Code Length | Huffman Code\n");
    text.push_str("---------------------------------------\n");
    for (symbol, entry) in sorted_rows(table) {
        text.push_str(&format!(
            "{:>12}{:>13}{:>15}\n",
            symbol, entry.length, entry.bits
        ));
    }
    text
}

/// Persist the code table. The row order never depends on the map's
/// iteration order, so the artifact is reproducible and diff-able.
pub fn write_code_table(path: &Path, table: &CodeTable) -> io::Result<()> {
    let mut out = File::create(path)?;
    out.write_all(format_code_table(table).as_bytes())
}

#[cfg(test)]
mod test {
    use super::{derive_codes, format_code_table, sorted_rows, write_code_table};
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    #[test]
    fn single_leaf_gets_the_empty_code() {
        let root = build_tree(&freqs(&[7; 16])).unwrap();
        let table = derive_codes(&root);
        assert_eq!(table.len(), 1);
        assert_eq!(table[&7].length, 0);
        assert_eq!(table[&7].bits, "");
    }

    #[test]
    fn equal_pair_is_coded_with_one_bit_each() {
        let mut data = vec![10_u8; 50];
        data.extend(vec![20_u8; 50]);
        let root = build_tree(&freqs(&data)).unwrap();
        let table = derive_codes(&root);
        assert_eq!(table[&10].bits, "0");
        assert_eq!(table[&20].bits, "1");
    }

    #[test]
    fn skewed_distribution_gets_textbook_lengths() {
        // p = 1/2, 1/4, 1/8, 1/8 over 16 samples.
        let mut data = vec![65_u8; 8];
        data.extend(vec![66_u8; 4]);
        data.extend(vec![67_u8; 2]);
        data.extend(vec![68_u8; 2]);
        let root = build_tree(&freqs(&data)).unwrap();
        let table = derive_codes(&root);
        assert_eq!(table[&65].length, 1);
        assert_eq!(table[&66].length, 2);
        assert_eq!(table[&67].length, 3);
        assert_eq!(table[&68].length, 3);
    }

    #[test]
    fn codes_satisfy_the_kraft_equality() {
        // Every internal node has exactly two children, so the lengths fill
        // the code space completely.
        let data: Vec<u8> = (0..2000).map(|i| (i * 7 % 143) as u8).collect();
        let root = build_tree(&freqs(&data)).unwrap();
        let table = derive_codes(&root);
        let kraft: f64 = table.values().map(|entry| 0.5_f64.powi(entry.length as i32)).sum();
        assert!((kraft - 1.0).abs() < 1e-9);
    }

    #[test]
    fn codes_are_prefix_free() {
        let data: Vec<u8> = (0..500).map(|i| (i % 23) as u8).collect();
        let root = build_tree(&freqs(&data)).unwrap();
        let table = derive_codes(&root);
        let rows = sorted_rows(&table);
        for (i, (_, a)) in rows.iter().enumerate() {
            for (j, (_, b)) in rows.iter().enumerate() {
                if i != j {
                    assert!(!b.bits.starts_with(&a.bits));
                }
            }
        }
    }

    #[test]
    fn rows_are_sorted_and_complete() {
        let data: Vec<u8> = (0..600).map(|i| (i % 47) as u8).collect();
        let hist = freqs(&data);
        let table = derive_codes(&build_tree(&hist).unwrap());
        let rows = sorted_rows(&table);
        assert_eq!(rows.len(), hist.alphabet_size());
        for pair in rows.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn formatted_table_uses_fixed_columns() {
        let mut data = vec![10_u8; 50];
        data.extend(vec![20_u8; 50]);
        let table = derive_codes(&build_tree(&freqs(&data)).unwrap());
        let expected = "Pixel Value | Code Length | Huffman Code\n\
                        ---------------------------------------\n\
                        \u{20}         10            1              0\n\
                        \u{20}         20            1              1\n";
        assert_eq!(format_code_table(&table), expected);
    }

    #[test]
    fn written_table_matches_the_rendered_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huffman_codes.txt");
        let data: Vec<u8> = (0..100).map(|i| (i % 5) as u8).collect();
        let table = derive_codes(&build_tree(&freqs(&data)).unwrap());
        write_code_table(&path, &table).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), format_code_table(&table));
    }
}
