// Core algorithm exports
pub mod fanout;
pub mod geo;
pub mod matcher;

pub use fanout::match_all;
pub use geo::{angular_difference, haversine_distance, initial_bearing};
pub use matcher::{Matcher, DEFAULT_BEAMWIDTH_DEG, DEFAULT_MAX_NEIGHBORS};
