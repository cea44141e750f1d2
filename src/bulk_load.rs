//! Sort-Tile-Recursive (STR) bulk loading: pack a flat entry list into a
//! balanced, homogeneous-level tree of a fixed fanout in one pass.

use crate::entry::Entry;
use crate::error::{check_capacity, CapacityError};
use crate::node::{Branch, Node};

/// Packs `entries` into a tree of node capacity `capacity` using the STR
/// algorithm (§4.4): repeatedly slice-and-tile the current level by x then
/// y center, until at most `capacity` nodes remain, then wrap those in one
/// root branch.
pub fn bulk_load<T>(entries: Vec<Entry<T>>, capacity: usize) -> Result<Node<T>, CapacityError> {
    check_capacity(capacity)?;

    let n = entries.len();
    tracing::debug!(n, capacity, "bulk loading entries into an STR tree");

    if n == 0 {
        return Ok(Node::Branch(Branch::empty()));
    }
    if n == 1 {
        let entry = entries.into_iter().next().expect("n == 1");
        return Ok(Node::Leaf(entry));
    }

    let mut level: Vec<Node<T>> = entries.into_iter().map(Node::Leaf).collect();
    while level.len() > capacity {
        tracing::trace!(level_size = level.len(), "tiling one STR level");
        level = str_tile(level, capacity);
    }
    Ok(Node::Branch(Branch::new(level)))
}

/// One pass of STR tiling: partitions `nodes` into `ceil(n / capacity)`
/// tiles, each becoming a branch of at most `capacity` children, by sorting
/// on the x-center into `ceil(sqrt(tiles))` vertical slices and then on the
/// y-center within each slice.
fn str_tile<T>(mut nodes: Vec<Node<T>>, capacity: usize) -> Vec<Node<T>> {
    let n = nodes.len();
    let tiles = div_ceil(n, capacity);
    let slices = (tiles as f64).sqrt().ceil() as usize;
    let slice_size = div_ceil(n, slices.max(1));

    nodes.sort_by(|a, b| {
        a.mbr()
            .center()
            .0
            .partial_cmp(&b.mbr().center().0)
            .unwrap()
    });

    let mut result = Vec::with_capacity(tiles);
    let mut remaining = nodes;
    while !remaining.is_empty() {
        let take = slice_size.min(remaining.len());
        let mut slice: Vec<_> = remaining.drain(..take).collect();
        slice.sort_by(|a, b| {
            a.mbr()
                .center()
                .1
                .partial_cmp(&b.mbr().center().1)
                .unwrap()
        });

        let mut slice_remaining = slice.drain(..).collect::<Vec<_>>();
        while !slice_remaining.is_empty() {
            let tile_take = capacity.min(slice_remaining.len());
            let tile: Vec<_> = slice_remaining.drain(..tile_take).collect();
            result.push(Node::Branch(Branch::new(tile)));
        }
    }
    result
}

fn div_ceil(dividend: usize, divisor: usize) -> usize {
    (dividend + divisor - 1) / divisor
}
