//! Generic 2-D grid toolkit.
//!
//! Builds immutable rectangular grids of typed cell values from raw text,
//! enumerates four-way neighbours under configurable match predicates,
//! partitions grids into maximal connected regions by iterative flood
//! fill, measures region perimeters, and answers directional line-of-sight
//! queries over integer coordinates.
//!
//! ```
//! use floodgrid::Grid;
//!
//! let grid = Grid::parse("AAA\nABA\nAAA")?;
//! let regions = grid.all_regions();
//!
//! assert_eq!(2, regions.len());
//! # Ok::<(), floodgrid::GridError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod region;
pub mod tile;

pub use error::GridError;
pub use geometry::{can_see, Direction, Position, DOWN, LEFT, RIGHT, UP};
pub use grid::{digit, Grid};
pub use region::Region;
pub use tile::{match_always, match_value, Tile};
