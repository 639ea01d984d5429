//! Seeded Lloyd's k-means over dense feature vectors.
//!
//! All randomness flows through a SplitMix64 stream seeded with a fixed,
//! documented constant, so the partition is reproducible for identical
//! input. The algorithm guarantees exactly `k` non-empty groups: an
//! emptied centroid is repopulated with the farthest point of the largest
//! group.

use pulse_core::errors::ClusteringError;

/// Deterministic pseudo-random stream (SplitMix64).
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Partition `vectors` into exactly `k` non-empty groups.
///
/// Returns one zero-based group label per input vector. Requires
/// `1 <= k <= vectors.len()`; the engine enforces that before calling.
pub fn partition(
    vectors: &[Vec<f32>],
    k: usize,
    seed: u64,
    max_iterations: usize,
) -> Result<Vec<usize>, ClusteringError> {
    let n = vectors.len();
    if k == 0 || k > n {
        return Err(ClusteringError::PartitioningFailed {
            reason: format!("k={k} out of range for {n} vectors"),
        });
    }
    if k == n {
        // Each point is its own group; no iteration needed.
        return Ok((0..n).collect());
    }

    let mut rng = SplitMix64::new(seed);
    let mut centroids = init_centroids(vectors, k, &mut rng);
    let mut labels = vec![0usize; n];

    for _ in 0..max_iterations {
        // Assignment step. Ties go to the lowest centroid index.
        let mut changed = false;
        for (i, v) in vectors.iter().enumerate() {
            let nearest = nearest_centroid(v, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }

        repair_empty_groups(vectors, &mut labels, k);

        // Update step.
        centroids = compute_means(vectors, &labels, k);

        if !changed {
            break;
        }
    }

    repair_empty_groups(vectors, &mut labels, k);
    Ok(labels)
}

/// k-means++ style seeding: first centroid uniform, the rest weighted by
/// squared distance to the nearest chosen centroid.
fn init_centroids(vectors: &[Vec<f32>], k: usize, rng: &mut SplitMix64) -> Vec<Vec<f32>> {
    let n = vectors.len();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    chosen.push((rng.next_u64() % n as u64) as usize);

    while chosen.len() < k {
        let dists: Vec<f64> = (0..n)
            .map(|i| {
                chosen
                    .iter()
                    .map(|&c| squared_distance(&vectors[i], &vectors[c]) as f64)
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = dists.iter().sum();

        let next = if total > 0.0 {
            let mut threshold = rng.next_f64() * total;
            let mut pick = n - 1;
            for (i, d) in dists.iter().enumerate() {
                threshold -= d;
                if threshold <= 0.0 {
                    pick = i;
                    break;
                }
            }
            pick
        } else {
            // All remaining points coincide with a centroid; take the first
            // index not yet chosen so centroids stay distinct by index.
            (0..n).find(|i| !chosen.contains(i)).unwrap_or(0)
        };
        chosen.push(next);
    }

    chosen.into_iter().map(|i| vectors[i].clone()).collect()
}

fn nearest_centroid(v: &[f32], centroids: &[Vec<f32>]) -> usize {
    let mut best = 0usize;
    let mut best_dist = f32::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let d = squared_distance(v, c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}

fn compute_means(vectors: &[Vec<f32>], labels: &[usize], k: usize) -> Vec<Vec<f32>> {
    let dims = vectors.first().map(Vec::len).unwrap_or(0);
    let mut sums = vec![vec![0.0f32; dims]; k];
    let mut counts = vec![0usize; k];
    for (v, &label) in vectors.iter().zip(labels) {
        counts[label] += 1;
        for (s, x) in sums[label].iter_mut().zip(v) {
            *s += x;
        }
    }
    for (sum, &count) in sums.iter_mut().zip(&counts) {
        if count > 0 {
            for s in sum.iter_mut() {
                *s /= count as f32;
            }
        }
    }
    sums
}

/// Move the farthest point of the largest group into each empty group so
/// that all `k` labels are populated.
fn repair_empty_groups(vectors: &[Vec<f32>], labels: &mut [usize], k: usize) {
    loop {
        let mut counts = vec![0usize; k];
        for &label in labels.iter() {
            counts[label] += 1;
        }
        let Some(empty) = counts.iter().position(|&c| c == 0) else {
            return;
        };

        let largest = counts
            .iter()
            .enumerate()
            .max_by_key(|(_, &c)| c)
            .map(|(j, _)| j)
            .unwrap_or(0);

        // Farthest member of the largest group from that group's mean.
        let means = compute_means(vectors, labels, k);
        let donor = labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == largest)
            .max_by(|(i, _), (j, _)| {
                let di = squared_distance(&vectors[*i], &means[largest]);
                let dj = squared_distance(&vectors[*j], &means[largest]);
                di.partial_cmp(&dj).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);

        match donor {
            Some(i) => labels[i] = empty,
            None => return,
        }
    }
}

fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.1],
            vec![0.1, 0.0],
            vec![0.05, 0.05],
            vec![5.0, 5.1],
            vec![5.1, 5.0],
            vec![5.05, 5.05],
        ]
    }

    #[test]
    fn k_out_of_range_is_an_error() {
        let vectors = two_blobs();
        assert!(partition(&vectors, 0, 42, 100).is_err());
        assert!(partition(&vectors, 7, 42, 100).is_err());
    }

    #[test]
    fn every_vector_gets_a_label() {
        let vectors = two_blobs();
        let labels = partition(&vectors, 2, 42, 100).unwrap();
        assert_eq!(labels.len(), vectors.len());
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn all_groups_non_empty() {
        let vectors = two_blobs();
        for k in 1..=vectors.len() {
            let labels = partition(&vectors, k, 42, 100).unwrap();
            let mut counts = vec![0usize; k];
            for &l in &labels {
                counts[l] += 1;
            }
            assert!(counts.iter().all(|&c| c > 0), "empty group at k={k}");
        }
    }

    #[test]
    fn separated_blobs_split_cleanly() {
        let vectors = two_blobs();
        let labels = partition(&vectors, 2, 42, 100).unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let vectors = two_blobs();
        let a = partition(&vectors, 3, 42, 100).unwrap();
        let b = partition(&vectors, 3, 42, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn identical_points_still_fill_k_groups() {
        let vectors = vec![vec![1.0, 1.0]; 5];
        let labels = partition(&vectors, 3, 42, 100).unwrap();
        let mut counts = vec![0usize; 3];
        for &l in &labels {
            counts[l] += 1;
        }
        assert!(counts.iter().all(|&c| c > 0));
    }
}
