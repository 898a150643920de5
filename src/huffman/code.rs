use std::collections::BTreeMap;

use crate::error::Error;
use crate::Result;

use super::tree::CodeTreeNode;
use super::Symbol;

/// Mapping from symbol to its binary code, bits written as '0'/'1'
/// characters. Prefix-free by construction for trees with two or more
/// leaves.
pub type CodeTable = BTreeMap<Symbol, String>;

/// Derives the code table from a prefix-code tree.
///
/// Depth-first traversal with an explicit worklist, so a highly skewed tree
/// cannot exhaust the call stack: descending left appends '0', descending
/// right appends '1', and every leaf records the accumulated bits as its
/// symbol's code. A lone-leaf root gets the one-bit code "0" instead of the
/// empty string, so encoding a single-symbol text still produces one
/// unambiguous bit per occurrence.
pub fn generate_code_table(root: &CodeTreeNode) -> CodeTable {
    let mut table = CodeTable::new();
    let mut worklist: Vec<(&CodeTreeNode, String)> = vec![(root, String::new())];
    while let Some((node, prefix)) = worklist.pop() {
        match node {
            CodeTreeNode::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    "0".to_owned()
                } else {
                    prefix
                };
                table.insert(*symbol, code);
            }
            CodeTreeNode::Internal { left, right, .. } => {
                worklist.push((right, format!("{}1", prefix)));
                worklist.push((left, format!("{}0", prefix)));
            }
        }
    }
    table
}

/// Concatenates the codes of all symbols of `text` in input order.
pub fn encode(text: &str, code_table: &CodeTable) -> Result<String> {
    let mut encoded = String::new();
    for symbol in text.chars() {
        let code = code_table
            .get(&symbol)
            .ok_or(Error::UnknownSymbol(symbol))?;
        encoded.push_str(code);
    }
    Ok(encoded)
}
