//! Ranking and markdown rendering.
//!
//! Each metric table ranks its own view of the records, so ranks computed
//! for one metric never appear in another metric's table.

pub mod compose;
pub mod rank;
pub mod table;

pub use compose::{custom_document, full_document};
pub use rank::{RankedRow, rank};
pub use table::render_table;
