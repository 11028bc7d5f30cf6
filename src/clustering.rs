//! K-means clustering over phrase embeddings
//!
//! Standard Lloyd's algorithm with one non-default policy: a centroid left
//! with zero members is reseeded to a random phrase's vector. The random
//! source is supplied by the caller so tests can seed it; production passes
//! `rand::thread_rng()`, so cluster labels are not stable across runs.

use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

/// Final clustering output
#[derive(Debug, Clone)]
pub struct ClusterModel {
    /// Clustered phrases, name ascending
    pub phrases: Vec<String>,
    /// Cluster id per phrase, parallel to `phrases`
    pub assignments: Vec<usize>,
    /// Centroid vector per cluster
    pub centroids: Vec<Vec<f64>>,
}

impl ClusterModel {
    /// Number of phrases assigned to `cluster`
    pub fn cluster_size(&self, cluster: usize) -> usize {
        self.assignments.iter().filter(|&&a| a == cluster).count()
    }

    /// Phrase -> cluster id lookup
    pub fn lookup(&self) -> FxHashMap<&str, usize> {
        self.phrases
            .iter()
            .map(String::as_str)
            .zip(self.assignments.iter().copied())
            .collect()
    }
}

/// Squared Euclidean distance between two equal-length vectors
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Run k-means over the embeddings.
///
/// Returns `None` (clustering skipped, not an error) when `cluster_count`
/// is zero or exceeds the number of embedded phrases. Initial centroids are
/// `cluster_count` distinct phrases drawn without replacement; iteration
/// stops early once no assignment changes. Phrases are processed in name
/// order, so a seeded `rng` makes the whole run reproducible.
pub fn run_kmeans<R: Rng>(
    embeddings: &FxHashMap<String, Vec<f64>>,
    cluster_count: usize,
    iterations: usize,
    rng: &mut R,
) -> Option<ClusterModel> {
    if cluster_count == 0 || embeddings.len() < cluster_count {
        return None;
    }

    let mut phrases: Vec<&String> = embeddings.keys().collect();
    phrases.sort();
    let data: Vec<&[f64]> = phrases.iter().map(|p| embeddings[*p].as_slice()).collect();
    let dim = data[0].len();

    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(cluster_count);
    let mut used = FxHashSet::default();
    while centroids.len() < cluster_count {
        let idx = rng.gen_range(0..data.len());
        if used.insert(idx) {
            centroids.push(data[idx].to_vec());
        }
    }

    let mut assignments = vec![usize::MAX; data.len()];
    for _ in 0..iterations {
        let mut changed = false;
        for (i, point) in data.iter().enumerate() {
            let mut best = 0;
            let mut best_dist = f64::MAX;
            for (c, centroid) in centroids.iter().enumerate() {
                let dist = squared_distance(point, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = c;
                }
            }
            if assignments[i] != best {
                assignments[i] = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![vec![0.0; dim]; cluster_count];
        let mut counts = vec![0usize; cluster_count];
        for (i, point) in data.iter().enumerate() {
            let cluster = assignments[i];
            counts[cluster] += 1;
            for (d, value) in point.iter().enumerate() {
                sums[cluster][d] += value;
            }
        }
        for (c, sum) in sums.iter_mut().enumerate() {
            if counts[c] == 0 {
                // Reseed an empty cluster from a random phrase's vector.
                let idx = rng.gen_range(0..data.len());
                *sum = data[idx].to_vec();
                continue;
            }
            let inv = 1.0 / counts[c] as f64;
            for value in sum.iter_mut() {
                *value *= inv;
            }
        }
        centroids = sums;
    }

    Some(ClusterModel {
        phrases: phrases.into_iter().cloned().collect(),
        assignments,
        centroids,
    })
}
