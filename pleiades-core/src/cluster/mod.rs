//! Clusters and cluster sets
//!
//! A [`Cluster`] owns a centroid plus the points assigned to it, in
//! insertion order. A [`ClusterSet`] is the ordered, index-addressable
//! result a clusterer returns.

use crate::error::{Error, Result};
use crate::points::{Centroid, Point};
use crate::source::DocumentSet;

/// A centroid and the points currently assigned to it.
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    points: Vec<Point>,
    centroid: Centroid,
}

impl Cluster {
    /// Empty cluster with an empty centroid
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty cluster seeded with an explicit centroid
    pub fn with_centroid(centroid: Centroid) -> Self {
        Self {
            points: Vec::new(),
            centroid,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point; duplicates are permitted.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drop all assigned points. The centroid is left untouched.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn get_point(&self, index: usize) -> Result<&Point> {
        self.points.get(index).ok_or(Error::OutOfRange {
            index,
            size: self.points.len(),
        })
    }

    /// Assigned points in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Handles of the assigned documents, in insertion order
    pub fn documents(&self) -> DocumentSet {
        let mut docs = DocumentSet::new();
        for point in &self.points {
            docs.add_document(point.document());
        }
        docs
    }

    pub fn centroid(&self) -> &Centroid {
        &self.centroid
    }

    pub fn set_centroid(&mut self, centroid: Centroid) {
        self.centroid = centroid;
    }

    /// Rebuild the centroid as the component-wise mean of the assigned
    /// points.
    ///
    /// An empty cluster ends up with a cleared centroid of magnitude 0.
    pub fn recalculate(&mut self) {
        self.centroid.clear();
        if self.points.is_empty() {
            return;
        }
        for point in &self.points {
            for (term, weight) in point.iter() {
                self.centroid.add(term, weight);
            }
        }
        self.centroid.divide(self.points.len() as f64);
        self.centroid.recalc_magnitude();
    }
}

/// Ordered collection of clusters produced by a clusterer.
#[derive(Debug, Clone, Default)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
}

impl ClusterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    pub fn get(&self, index: usize) -> Result<&Cluster> {
        self.clusters.get(index).ok_or(Error::OutOfRange {
            index,
            size: self.clusters.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Cluster> {
        let size = self.clusters.len();
        self.clusters
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, size })
    }

    /// Number of points assigned to the cluster at `index`
    pub fn cluster_size(&self, index: usize) -> Result<usize> {
        Ok(self.get(index)?.len())
    }

    /// Append `point` to the cluster at `index`.
    pub fn add_to_cluster(&mut self, point: Point, index: usize) -> Result<()> {
        self.get_mut(index)?.add_point(point);
        Ok(())
    }

    /// Drop the points of every cluster, retaining the centroids.
    pub fn clear_clusters(&mut self) {
        for cluster in &mut self.clusters {
            cluster.clear();
        }
    }

    /// Recalculate every cluster's centroid from its current points.
    pub fn recalculate_centroids(&mut self) {
        for cluster in &mut self.clusters {
            cluster.recalculate();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }
}

impl std::ops::Index<usize> for ClusterSet {
    type Output = Cluster;

    fn index(&self, index: usize) -> &Cluster {
        &self.clusters[index]
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
