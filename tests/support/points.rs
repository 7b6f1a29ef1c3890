#![allow(dead_code)]

use r2_voronoi::Point2;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Generate random sites uniformly distributed in `[0, extent)^2`.
pub fn random_square_points(n: usize, extent: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_square_points_with_rng(n, extent, &mut rng)
}

pub fn random_square_points_with_rng<R: Rng + ?Sized>(
    n: usize,
    extent: f64,
    rng: &mut R,
) -> Vec<Point2> {
    (0..n)
        .map(|_| Point2::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

/// Generate a `side x side` grid with spacing 1, each site moved by up to
/// `jitter` on both axes.
pub fn jittered_grid_points(side: usize, jitter: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            let (mut x, mut y) = (i as f64, j as f64);
            if jitter > 0.0 {
                x += rng.gen_range(-jitter..jitter);
                y += rng.gen_range(-jitter..jitter);
            }
            points.push(Point2::new(x, y));
        }
    }
    points
}

// =============================================================================
// Adversarial Point Generators for Stress Testing
// =============================================================================

/// Generate points along the line `y = slope * x + offset`.
///
/// No three sites ever define a vertex; the diagram is a set of parallel
/// bisectors.
pub fn colinear_points(n: usize, slope: f64, offset: f64) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            Point2::new(x, slope * x + offset)
        })
        .collect()
}

/// Generate `columns` vertical columns of `per_column` sites each.
///
/// Every column shares one x, so the sweep meets many simultaneous site
/// events. Within a column sites are listed bottom to top.
pub fn same_x_columns(columns: usize, per_column: usize, spacing: f64) -> Vec<Point2> {
    let mut points = Vec::with_capacity(columns * per_column);
    for c in 0..columns {
        for r in 0..per_column {
            points.push(Point2::new(c as f64 * spacing, r as f64 * spacing));
        }
    }
    points
}

/// Generate points on a circle, optionally jittered radially.
///
/// With zero jitter every site is concyclic and all vertex predictions share
/// one center.
pub fn circle_points(n: usize, center: Point2, radius: f64, jitter: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            let r = if jitter > 0.0 {
                radius + rng.gen_range(-jitter..jitter)
            } else {
                radius
            };
            Point2::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect()
}

/// Generate tight clusters of sites around random centers.
///
/// Mixes very short and very long site-to-site distances in one diagram.
pub fn clustered_points(
    num_clusters: usize,
    per_cluster: usize,
    extent: f64,
    spread: f64,
    seed: u64,
) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(num_clusters * per_cluster);
    for _ in 0..num_clusters {
        let cx = rng.gen_range(0.0..extent);
        let cy = rng.gen_range(0.0..extent);
        for _ in 0..per_cluster {
            points.push(Point2::new(
                cx + rng.gen_range(-spread..spread),
                cy + rng.gen_range(-spread..spread),
            ));
        }
    }
    points
}

/// Generate random sites in the square of side `extent` with corner `origin`.
pub fn offset_points(n: usize, origin: Point2, extent: f64, seed: u64) -> Vec<Point2> {
    random_square_points(n, extent, seed)
        .into_iter()
        .map(|p| Point2::new(origin.x + p.x, origin.y + p.y))
        .collect()
}

/// Return `points` in a seeded random order.
pub fn shuffled(points: &[Point2], seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = points.to_vec();
    out.shuffle(&mut rng);
    out
}

/// One column of sites at `x = 0` with random y, plus random sites to its
/// right. The column is listed in generation order (not sorted by y).
pub fn column_with_interior(per_column: usize, interior: usize, extent: f64, seed: u64) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points: Vec<Point2> = (0..per_column)
        .map(|_| Point2::new(0.0, rng.gen_range(0.0..extent)))
        .collect();
    points.extend(
        (0..interior).map(|_| Point2::new(rng.gen_range(1.0..extent), rng.gen_range(0.0..extent))),
    );
    points
}
