//! Constructive heuristics for building a visiting order over a stop set.
//!
//! Every constructor returns a permutation of `0..n`: positions into the
//! stop slice (and distance matrix) it was given.
//!
//! - [`nearest_neighbor`] — Greedy nearest neighbor from the first stop, O(n²)
//! - [`farthest_insertion`] — Farthest insertion from the most distant pair, O(n³)
//! - [`nearest_insertion`] — Nearest insertion from the first stop, O(n³)
//! - [`hull_insertion`] — Convex hull boundary plus cheapest insertion, O(n²)
//! - [`BypassCorridor`] — Landmark endpoints first, then input order, O(n)
//! - [`perimeter_first`], [`latitude_zigzag`], [`reversed`], [`shuffled`] —
//!   shape variants for a wider candidate pool

mod bypass;
mod hull_insertion;
mod insertion;
mod nearest_neighbor;
mod variants;

pub use bypass::{BypassCorridor, Landmark};
pub use hull_insertion::hull_insertion;
pub use insertion::{farthest_insertion, nearest_insertion};
pub use nearest_neighbor::nearest_neighbor;
pub use variants::{latitude_zigzag, perimeter_first, reversed, shuffled};
