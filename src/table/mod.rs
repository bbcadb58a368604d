//! The table: four suit piles and the legal-play rule.
//!
//! ## Key Types
//!
//! - `Pile`: one suit's run of consecutive ranks, grown at either end
//! - `Table`: the four piles plus the anchor rank that opens an empty pile
//! - `PileEnd`: which end of a pile a committed card landed on

pub mod pile;
pub mod board;

pub use pile::{Pile, PileEnd};
pub use board::Table;
