use std::cmp::Ordering;

use crate::core::geo::{angular_difference, haversine_distance, initial_bearing};
use crate::models::{CellSite, NeighborMatch};

/// Default total beam width in degrees
pub const DEFAULT_BEAMWIDTH_DEG: f64 = 120.0;

/// Default cap on neighbors kept per source cell
pub const DEFAULT_MAX_NEIGHBORS: usize = 30;

/// Beam-filtered nearest-neighbor matcher
///
/// For one source cell, scans all target cells, keeps those whose bearing
/// from the source lies within half the beam width of the source's antenna
/// azimuth, and returns the nearest ones by great-circle distance.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    beamwidth_deg: f64,
    max_neighbors: usize,
}

impl Matcher {
    pub fn new(beamwidth_deg: f64, max_neighbors: usize) -> Self {
        Self {
            beamwidth_deg,
            max_neighbors,
        }
    }

    pub fn beamwidth_deg(&self) -> f64 {
        self.beamwidth_deg
    }

    pub fn max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    /// Find the nearest in-beam neighbors of `source` among `targets`
    ///
    /// # Returns
    /// At most `max_neighbors` matches, sorted ascending by distance.
    /// Equal distances keep the original target order (stable sort).
    pub fn find_neighbors(&self, source: &CellSite, targets: &[CellSite]) -> Vec<NeighborMatch> {
        let half_beam = self.beamwidth_deg / 2.0;

        let mut neighbors: Vec<NeighborMatch> = targets
            .iter()
            .filter_map(|target| {
                let bearing = initial_bearing(
                    source.latitude,
                    source.longitude,
                    target.latitude,
                    target.longitude,
                );

                // Include form: a NaN difference (from NaN coordinates or
                // azimuth) fails the comparison and the pair drops out
                let in_beam = angular_difference(bearing, source.azimuth_deg) <= half_beam;

                in_beam.then(|| NeighborMatch {
                    source: source.clone(),
                    target: target.clone(),
                    distance_km: haversine_distance(
                        source.latitude,
                        source.longitude,
                        target.latitude,
                        target.longitude,
                    ),
                })
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });

        // Cap is exact: max_neighbors entries, never one extra
        neighbors.truncate(self.max_neighbors);

        neighbors
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_BEAMWIDTH_DEG, DEFAULT_MAX_NEIGHBORS)
    }
}
