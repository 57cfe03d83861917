//! Local search operators for improving a visiting order.
//!
//! - [`two_opt_improve`] — Open-path 2-opt segment reversal, first improvement

mod two_opt;

pub use two_opt::{improve_route, two_opt_improve};
