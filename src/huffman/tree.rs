use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::Error;
use crate::Result;

use super::{Symbol, SymbolFrequency};

/// A node of the prefix-code tree.
///
/// Internal nodes always own exactly two children and carry the sum of their
/// frequencies; leaves carry a symbol. The tree is built fresh for every
/// compress request and discarded once the code table is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTreeNode {
    Leaf {
        symbol: Symbol,
        frequency: u32,
    },
    Internal {
        frequency: u32,
        left: Box<CodeTreeNode>,
        right: Box<CodeTreeNode>,
    },
}

// Heap entry ordered by (frequency, insertion order). The insertion order
// component makes frequency ties deterministic: leaves keep the order of the
// frequency table and merged nodes queue behind all earlier entries of the
// same frequency, which reproduces a stable sort-and-shift selection.
struct HeapNode {
    frequency: u32,
    insertion_order: usize,
    node: CodeTreeNode,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.frequency, self.insertion_order).cmp(&(other.frequency, other.insertion_order))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.insertion_order == other.insertion_order
    }
}

impl Eq for HeapNode {}

/// Builds the prefix-code tree for a frequency table.
///
/// The two least frequent nodes are repeatedly merged under a new internal
/// node until a single root remains; the first-selected node becomes the left
/// child. Entries with frequency zero describe symbols without occurrences
/// and are skipped. A table with exactly one positive entry yields a lone
/// leaf root.
pub fn build_code_tree(frequencies: &[SymbolFrequency]) -> Result<CodeTreeNode> {
    let mut heap = BinaryHeap::new();
    let mut insertion_order = 0;
    for &SymbolFrequency { symbol, frequency } in frequencies {
        if frequency == 0 {
            continue;
        }
        heap.push(Reverse(HeapNode {
            frequency,
            insertion_order,
            node: CodeTreeNode::Leaf { symbol, frequency },
        }));
        insertion_order += 1;
    }
    if heap.is_empty() {
        return Err(Error::EmptyInput);
    }
    while heap.len() > 1 {
        let first = heap.pop().unwrap().0;
        let second = heap.pop().unwrap().0;
        let frequency = first.frequency + second.frequency;
        heap.push(Reverse(HeapNode {
            frequency,
            insertion_order,
            node: CodeTreeNode::Internal {
                frequency,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        insertion_order += 1;
    }
    Ok(heap.pop().unwrap().0.node)
}

impl CodeTreeNode {
    pub fn frequency(&self) -> u32 {
        match self {
            Self::Leaf { frequency, .. } => *frequency,
            Self::Internal { frequency, .. } => *frequency,
        }
    }

    /// Decodes a sequence of '0'/'1' characters by walking the tree,
    /// emitting a symbol and restarting at the root on every leaf.
    ///
    /// A lone-leaf tree accepts only '0' bits, one symbol occurrence each,
    /// mirroring the one-bit code the table generator assigns in that case.
    pub fn decode(&self, bits: &str) -> Result<String> {
        if let Self::Leaf { symbol, .. } = self {
            return decode_lone_leaf(*symbol, bits);
        }
        let mut decoded = String::new();
        let mut current = self;
        for bit in bits.chars() {
            let (left, right) = match current {
                Self::Internal { left, right, .. } => (left, right),
                Self::Leaf { .. } => unreachable!("walk restarts at the root after each leaf"),
            };
            current = match bit {
                '0' => left,
                '1' => right,
                other => return Err(Error::InvalidBit(other)),
            };
            if let Self::Leaf { symbol, .. } = current {
                decoded.push(*symbol);
                current = self;
            }
        }
        if !std::ptr::eq(current, self) {
            return Err(Error::TruncatedBitSequence);
        }
        Ok(decoded)
    }
}

fn decode_lone_leaf(symbol: Symbol, bits: &str) -> Result<String> {
    let mut decoded = String::new();
    for bit in bits.chars() {
        match bit {
            '0' => decoded.push(symbol),
            other => return Err(Error::InvalidBit(other)),
        }
    }
    Ok(decoded)
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Tree visualization
impl CodeTreeNode {
    fn render_lines(&self) -> Vec<String> {
        match self {
            Self::Leaf { symbol, frequency } => {
                vec![format!("(s:{},f:{})", symbol, frequency)]
            }
            Self::Internal { left, right, .. } => {
                let left_box = left.render_lines();
                let right_box = right.render_lines();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = (left_box[0].chars().position(|c| c != ' ').unwrap() * 2
                    + left_box[0].trim().chars().count())
                    / 2;
                let right_pos = (right_box[0].chars().position(|c| c != ' ').unwrap() * 2
                    + right_box[0].trim().chars().count())
                    / 2;
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let left_depth = left_box.len();
                let right_depth = right_box.len();
                for i in 0..std::cmp::max(left_depth, right_depth) {
                    let mut left_str = SPACE.repeat(left_width);
                    let mut right_str = SPACE.repeat(right_width);
                    if i < left_depth {
                        left_str = left_box[i].clone();
                    }
                    if i < right_depth {
                        right_str = right_box[i].clone();
                    }
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for CodeTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines().iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
