//! cellmatch - beam-filtered nearest-neighbour matching for cell-site exports
//!
//! This library takes two CSV exports of cell sites (id, cell name, latitude,
//! longitude, antenna azimuth) and, for every source cell, finds the nearest
//! target cells that fall within an angular beam centered on the source's
//! azimuth, ranked by great-circle distance.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    geo::{angular_difference, haversine_distance, initial_bearing},
    match_all, Matcher,
};
pub use crate::error::CellMatchError;
pub use crate::models::{CellSite, NeighborMatch};
