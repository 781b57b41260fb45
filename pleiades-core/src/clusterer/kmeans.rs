//! K-Means clusterer
//!
//! Classic assign-then-update iteration over TF-IDF points. Assignment
//! maximizes the configured similarity metric; the update step moves each
//! centroid to the mean of its points. Iteration stops once no point
//! changes cluster, or at the iteration cap.

use log::debug;
use rand::SeedableRng;
use rand::prelude::SliceRandom;

use super::Clusterer;
use crate::cluster::{Cluster, ClusterSet};
use crate::error::{Error, Result};
use crate::freq::TermListGroup;
use crate::points::{Centroid, Point};
use crate::similarity::{CosineDistance, Similarity};
use crate::source::MSet;

/// Hard cap on iterations when no explicit limit is configured
const MAX_ITERATIONS: usize = 100;

/// K-Means clustering over the TF-IDF vector space of an [`MSet`].
///
/// By default the first `k` documents seed the clusters and assignment uses
/// [`CosineDistance`]; both are configurable:
///
/// ```
/// use pleiades_core::{Clusterer, EuclidianDistance, KMeans};
///
/// let clusterer = KMeans::new(4)
///     .with_max_iters(50)
///     .with_seed(42)
///     .with_similarity(Box::new(EuclidianDistance));
/// # let _ = clusterer.description();
/// ```
pub struct KMeans {
    k: usize,
    max_iters: usize,
    seed: Option<u64>,
    similarity: Box<dyn Similarity>,
}

impl KMeans {
    /// `k` is the number of clusters to form.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iters: 0,
            seed: None,
            similarity: Box::new(CosineDistance),
        }
    }

    /// Cap the number of assign-update iterations.
    ///
    /// 0 (the default) means no explicit cap; a hard safety cap of 100
    /// iterations still applies.
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Seed the clusters with `k` randomly selected distinct documents.
    ///
    /// Without a seed the first `k` documents of the MSet are used. Either
    /// way the selection is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the similarity metric used during assignment.
    pub fn with_similarity(mut self, similarity: Box<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    /// Project every MSet document into the vector space, in rank order.
    fn initialize_points(&self, mset: &MSet) -> Vec<Point> {
        let tlg = TermListGroup::new(mset);
        mset.iter().map(|doc| Point::new(&tlg, doc)).collect()
    }

    /// Pick `k` distinct points as the initial centroids.
    fn seed_clusters(&self, points: &[Point]) -> ClusterSet {
        let mut cset = ClusterSet::new();
        match self.seed {
            None => {
                for point in &points[..self.k] {
                    cset.add_cluster(Cluster::with_centroid(Centroid::from_point(point)));
                }
            }
            Some(seed) => {
                let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                let mut indices: Vec<usize> = (0..points.len()).collect();
                indices.shuffle(&mut rng);
                for &i in &indices[..self.k] {
                    cset.add_cluster(Cluster::with_centroid(Centroid::from_point(&points[i])));
                }
            }
        }
        cset
    }

    /// Index of the cluster whose centroid is most similar to `point`.
    /// Ties go to the lowest index.
    fn nearest_cluster(&self, point: &Point, cset: &ClusterSet) -> usize {
        let mut best = 0;
        let mut best_similarity = f64::NEG_INFINITY;
        for (c, cluster) in cset.iter().enumerate() {
            let similarity = self.similarity.similarity(point, cluster.centroid());
            if similarity > best_similarity {
                best_similarity = similarity;
                best = c;
            }
        }
        best
    }
}

impl Clusterer for KMeans {
    fn cluster(&self, mset: &MSet) -> Result<ClusterSet> {
        if self.k == 0 {
            return Err(Error::InvalidArgument(
                "cluster count must be greater than zero".into(),
            ));
        }
        if mset.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot cluster an empty document set".into(),
            ));
        }
        if self.k > mset.len() {
            return Err(Error::InvalidArgument(format!(
                "cannot form {} clusters from {} documents",
                self.k,
                mset.len()
            )));
        }

        let points = self.initialize_points(mset);
        let mut cset = self.seed_clusters(&points);

        let cap = if self.max_iters == 0 {
            MAX_ITERATIONS
        } else {
            self.max_iters
        };

        // usize::MAX marks "not yet assigned", so the first pass counts
        // every point as moved.
        let mut assignment = vec![usize::MAX; points.len()];
        for iteration in 1..=cap {
            cset.clear_clusters();
            let mut moved = 0usize;
            for (j, point) in points.iter().enumerate() {
                let best = self.nearest_cluster(point, &cset);
                if assignment[j] != best {
                    moved += 1;
                }
                assignment[j] = best;
                cset.add_to_cluster(point.clone(), best)?;
            }
            debug!("kmeans iteration {iteration}: {moved} point(s) changed cluster");

            if moved == 0 {
                // Centroids already match this assignment; nothing to update.
                break;
            }

            // Empty clusters keep their previous centroid.
            for c in 0..self.k {
                if !cset[c].is_empty() {
                    cset.get_mut(c)?.recalculate();
                }
            }
        }

        Ok(cset)
    }

    fn description(&self) -> &'static str {
        "KMeans Clusterer"
    }
}
