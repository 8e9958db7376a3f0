#![forbid(unsafe_code)]

use std::fmt;

use finaut_automata::StateIndex;
use finaut_utilities::TagIndex;

/// A unique type for the blocks of a partition.
pub struct BlockTag;

/// The index for a block.
pub type BlockIndex = TagIndex<usize, BlockTag>;

/// A trait for partition refinement algorithms that expose the block number
/// for every state. Can be used to compute the quotient automaton.
///
/// The invariants are that the union of all blocks is the original set, and
/// that each block contains distinct elements.
pub trait Partition {
    /// Returns the block number for the given state.
    fn block_number(&self, state: StateIndex) -> BlockIndex;

    /// Returns the number of blocks in the partition.
    fn num_of_blocks(&self) -> usize;
}

/// Defines a partition based on an explicit indexing of elements to their
/// block number.
#[derive(Debug)]
pub struct IndexedPartition {
    partition: Vec<BlockIndex>,

    num_of_blocks: usize,
}

impl IndexedPartition {
    /// Create a new partition where all elements are in a single block.
    pub fn new(num_of_elements: usize) -> IndexedPartition {
        IndexedPartition {
            partition: vec![BlockIndex::new(0); num_of_elements],
            num_of_blocks: 1,
        }
    }

    /// Sets the block number of the given element.
    pub fn set_block(&mut self, element: StateIndex, block_number: BlockIndex) {
        self.num_of_blocks = self.num_of_blocks.max(block_number.value() + 1);

        self.partition[element.value()] = block_number;
    }

    /// Iterates over the block number of every element.
    pub fn iter(&self) -> impl Iterator<Item = BlockIndex> + '_ {
        self.partition.iter().copied()
    }
}

impl Partition for IndexedPartition {
    fn block_number(&self, state: StateIndex) -> BlockIndex {
        self.partition[state.value()]
    }

    fn num_of_blocks(&self) -> usize {
        self.num_of_blocks
    }
}

impl fmt::Display for IndexedPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut blocks: Vec<Vec<usize>> = vec![Vec::new(); self.num_of_blocks];
        for (element, block) in self.iter().enumerate() {
            blocks[block.value()].push(element);
        }

        write!(f, "{{ ")?;
        let mut first = true;
        for members in blocks.iter().filter(|members| !members.is_empty()) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;

            write!(f, "{{")?;
            for (position, element) in members.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{element}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_indexed_partition() {
        let mut partition = IndexedPartition::new(4);
        assert_eq!(partition.num_of_blocks(), 1);

        partition.set_block(StateIndex::new(1), BlockIndex::new(1));
        partition.set_block(StateIndex::new(3), BlockIndex::new(1));

        assert_eq!(partition.num_of_blocks(), 2);
        assert_eq!(partition.block_number(StateIndex::new(0)), BlockIndex::new(0));
        assert_eq!(partition.block_number(StateIndex::new(3)), BlockIndex::new(1));
        assert_eq!(format!("{partition}"), "{ {0, 2}, {1, 3} }");
    }
}
