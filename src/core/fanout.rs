use rayon::prelude::*;

use crate::core::matcher::Matcher;
use crate::models::{CellSite, NeighborMatch};

/// Run the matcher over every source cell in parallel
///
/// Each source is an independent unit of work reading only its own record,
/// the shared immutable target slice, and the matcher parameters. Per-source
/// results are collected by source index and flattened afterwards, so the
/// output order matches the input source order for any pool size.
pub fn match_all(
    matcher: &Matcher,
    sources: &[CellSite],
    targets: &[CellSite],
) -> Vec<NeighborMatch> {
    let per_source: Vec<Vec<NeighborMatch>> = sources
        .par_iter()
        .map(|source| matcher.find_neighbors(source, targets))
        .collect();

    per_source.into_iter().flatten().collect()
}
