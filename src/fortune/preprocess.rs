//! Preprocessing helpers (drop exactly coincident sites).

use glam::DVec2;
use rustc_hash::FxHashSet;

/// Result of removing duplicate sites before the sweep.
pub(crate) struct DedupResult {
    /// Sites to sweep, first occurrence of each location in input order.
    pub effective_sites: Vec<DVec2>,
    /// Number of sites that were dropped.
    pub num_removed: usize,
}

/// Bit pattern key for a site; `-0.0` and `0.0` map to the same key.
#[inline]
fn site_key(p: DVec2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Drop sites whose coordinates exactly repeat an earlier site.
///
/// Coincident sites make the breakpoint between their arcs undefined; the
/// sweep assumes they never occur.
pub(crate) fn dedup_exact(sites: Vec<DVec2>) -> DedupResult {
    let mut seen = FxHashSet::default();
    seen.reserve(sites.len());

    let n = sites.len();
    let effective_sites: Vec<DVec2> = sites
        .into_iter()
        .filter(|&p| seen.insert(site_key(p)))
        .collect();

    DedupResult {
        num_removed: n - effective_sites.len(),
        effective_sites,
    }
}
