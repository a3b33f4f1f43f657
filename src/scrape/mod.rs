// src/scrape/mod.rs
mod roster;
mod normalize;

pub use roster::{extract, RawPlayerRecord};
pub use normalize::{normalize, RosterTable, REQUIRED_FIELDS};
