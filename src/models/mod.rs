// Model exports
pub mod domain;

pub use domain::{CellSite, NeighborMatch, MIN_RECORD_FIELDS};
