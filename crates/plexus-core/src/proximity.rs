use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::frame::Segment;

/// Number of unordered pairs among `count` points, the most edges a
/// single frame can produce. `None` if that does not fit in `usize`.
pub const fn checked_max_edges(count: usize) -> Option<usize> {
    // Halve the even factor first so only the final product can overflow
    if count % 2 == 0 {
        (count / 2).checked_mul(count.saturating_sub(1))
    } else {
        count.checked_mul((count - 1) / 2)
    }
}

/// [`checked_max_edges`], saturating at `usize::MAX`. Counts accepted by
/// [`NetworkConfig::validate`](crate::NetworkConfig::validate) never saturate.
pub const fn max_edges(count: usize) -> usize {
    match checked_max_edges(count) {
        Some(edges) => edges,
        None => usize::MAX,
    }
}

/// Brute-force proximity scan.
///
/// Visits every pair `(i, j)` with `i < j` in ascending order and writes
/// a segment for each pair strictly closer than `threshold`. Returns the
/// number of segments written; `out[..n]` holds them in scan order and
/// the rest of `out` is left untouched.
///
/// `out` must hold at least `max_edges(positions.len())` segments.
pub fn scan_pairs(positions: &[Vec3], threshold: f32, out: &mut [Segment]) -> usize {
    debug_assert!(out.len() >= max_edges(positions.len()));

    let mut written = 0;
    for (i, &a) in positions.iter().enumerate() {
        for &b in &positions[i + 1..] {
            if a.distance(b) < threshold {
                out[written] = Segment::new(a, b);
                written += 1;
            }
        }
    }
    written
}

/// Reusable proximity scanner.
///
/// Serial builds forward to [`scan_pairs`]. With the `parallel` feature
/// each row `i` is scanned on the rayon pool into its own scratch vector
/// against the same immutable position slice, then rows are copied out
/// in ascending `i`, so the output matches the serial scan exactly.
/// Row scratch grows on demand and keeps its capacity between frames.
#[derive(Debug, Default)]
pub struct PairScanner {
    #[cfg(feature = "parallel")]
    rows: Vec<Vec<Segment>>,
}

impl PairScanner {
    pub fn new(count: usize) -> Self {
        #[cfg(feature = "parallel")]
        {
            Self {
                rows: (0..count).map(|_| Vec::new()).collect(),
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            let _ = count;
            Self {}
        }
    }

    pub fn scan(&mut self, positions: &[Vec3], threshold: f32, out: &mut [Segment]) -> usize {
        #[cfg(feature = "parallel")]
        {
            debug_assert!(out.len() >= max_edges(positions.len()));

            self.rows.resize_with(positions.len(), Vec::new);
            self.rows
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, row)| {
                    row.clear();
                    let a = positions[i];
                    for &b in &positions[i + 1..] {
                        if a.distance(b) < threshold {
                            row.push(Segment::new(a, b));
                        }
                    }
                });

            let mut written = 0;
            for row in &self.rows {
                out[written..written + row.len()].copy_from_slice(row);
                written += row.len();
            }
            written
        }

        #[cfg(not(feature = "parallel"))]
        {
            scan_pairs(positions, threshold, out)
        }
    }
}
