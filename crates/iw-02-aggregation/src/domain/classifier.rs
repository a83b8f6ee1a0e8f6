//! Dominant-block classifier
//!
//! Addresses are folded into blocks of `BLOCK_SIZE` consecutive values and
//! each block is weighted by the summed counts of its addresses. The heaviest
//! block is dominant; its addresses are "good", every other distinct address
//! is "bad".
//!
//! ## Invariants
//!
//! - **Totality**: every distinct input address lands in exactly one of
//!   `good` or `bad`.
//! - **Determinism**: ties between equally heavy blocks resolve to the lowest
//!   numeric block value.
//! - Membership is by distinct address, not weighted by count.

use std::collections::{BTreeMap, HashMap};

use shared_types::{Address, Block};

/// Outcome of classifying one application's frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Sum of all observation counts.
    pub count: u64,
    /// Heaviest block, `None` only for an empty table.
    pub dominant_block: Option<Block>,
    /// Distinct addresses in the dominant block, ascending numeric order.
    pub good: Vec<Address>,
    /// All other distinct addresses, ascending numeric order.
    pub bad: Vec<Address>,
}

/// Partition `counts` into good and bad addresses.
pub fn classify(counts: &HashMap<Address, u64>) -> ClassificationResult {
    let mut count = 0u64;
    // Ordered so the first maximum seen is the lowest block.
    let mut weights: BTreeMap<Block, u64> = BTreeMap::new();

    for (address, &n) in counts {
        count += n;
        *weights.entry(address.block()).or_insert(0) += n;
    }

    let dominant_block = dominant(&weights);

    let (mut good, mut bad): (Vec<Address>, Vec<Address>) = counts
        .keys()
        .copied()
        .partition(|address| Some(address.block()) == dominant_block);
    good.sort_unstable();
    bad.sort_unstable();

    ClassificationResult {
        count,
        dominant_block,
        good,
        bad,
    }
}

fn dominant(weights: &BTreeMap<Block, u64>) -> Option<Block> {
    let mut best: Option<(Block, u64)> = None;
    for (&block, &weight) in weights {
        match best {
            Some((_, top)) if weight <= top => {}
            _ => best = Some((block, weight)),
        }
    }
    best.map(|(block, _)| block)
}
