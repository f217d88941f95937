//! Connected-region discovery and boundary measurement.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use crate::geometry::{DOWN, LEFT, RIGHT, UP};
use crate::grid::Grid;
use crate::tile::{match_value, Tile};

/// A maximal connected set of tiles: every member is reachable from every
/// other via four-way steps that satisfied the predicate the region was
/// built with. Owns its tiles; the source grid may be dropped.
#[derive(Debug, Clone)]
pub struct Region<T> {
    tiles: HashSet<Tile<T>>,
}

impl<T: Eq + Hash> Region<T> {
    fn from_tiles(tiles: HashSet<Tile<T>>) -> Self {
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles in the region. Alias of [`Region::len`] for callers
    /// summing area x perimeter prices.
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, tile: &Tile<T>) -> bool {
        self.tiles.contains(tile)
    }

    pub fn contains_position(&self, row: usize, col: usize) -> bool {
        self.tiles.iter().any(|t| t.row == row && t.col == col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile<T>> {
        self.tiles.iter()
    }

    /// Total boundary length: for each tile, one unit per four-way
    /// neighbour coordinate absent from the region. Counts outer edges and
    /// hole edges alike; grid-boundary sides count naturally because the
    /// coordinate beyond the edge is never in the set.
    pub fn perimeter(&self) -> usize {
        let coordinates: HashSet<(isize, isize)> = self
            .tiles
            .iter()
            .map(|tile| (tile.row as isize, tile.col as isize))
            .collect();

        self.tiles
            .iter()
            .map(|tile| {
                [UP, RIGHT, DOWN, LEFT]
                    .iter()
                    .filter(|step| {
                        let side = (tile.row as isize + step.di, tile.col as isize + step.dj);
                        !coordinates.contains(&side)
                    })
                    .count()
            })
            .sum()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Region<T> {
    type Item = &'a Tile<T>;
    type IntoIter = std::collections::hash_set::Iter<'a, Tile<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl<T: Clone + Eq + Hash> Grid<T> {
    /// Flood fill from `seed`: the maximal set of tiles reachable through
    /// steps accepted by `predicate`.
    ///
    /// Iterative, with an explicit growable stack, so deep regions cannot
    /// overflow the call stack. Discovery order is unspecified; only set
    /// membership matters.
    pub fn region<P>(&self, seed: Tile<T>, predicate: P) -> Region<T>
    where
        P: Fn(&Tile<T>, &Tile<T>) -> bool,
    {
        let mut tiles = HashSet::new();
        let mut stack = vec![seed];

        while let Some(current) = stack.pop() {
            if !tiles.insert(current.clone()) {
                continue;
            }
            stack.extend(
                self.neighbours_matching(&current, &predicate)
                    .into_iter()
                    .filter(|neighbour| !tiles.contains(neighbour)),
            );
        }

        Region::from_tiles(tiles)
    }

    /// Flood fill from `seed` grouping tiles of equal value.
    pub fn region_at(&self, seed: Tile<T>) -> Region<T> {
        self.region(seed, match_value)
    }

    /// Partitions the whole grid into disjoint regions under `predicate`.
    ///
    /// Scans coordinates in row-major order and seeds a flood fill at each
    /// one not covered by an earlier region, so every cell lands in exactly
    /// one region.
    #[tracing::instrument(skip(self, predicate))]
    pub fn regions<P>(&self, predicate: P) -> Vec<Region<T>>
    where
        P: Fn(&Tile<T>, &Tile<T>) -> bool,
    {
        let mut regions = Vec::new();
        // values are immutable after construction, so coordinates alone
        // identify visited tiles
        let mut visited: HashSet<(usize, usize)> =
            HashSet::with_capacity(self.rows() * self.cols());

        for (i, j) in (0..self.rows()).cartesian_product(0..self.cols()) {
            if visited.contains(&(i, j)) {
                continue;
            }
            let Some(seed) = self.tile(i, j) else {
                continue;
            };
            let region = self.region(seed, &predicate);
            visited.extend(region.iter().map(|tile| (tile.row, tile.col)));
            regions.push(region);
        }

        debug!("partitioned grid into {} regions", regions.len());
        regions
    }

    /// Partitions the whole grid into maximal same-value regions.
    pub fn all_regions(&self) -> Vec<Region<T>> {
        self.regions(match_value)
    }
}
