//! Round-robin clusterer

use super::Clusterer;
use crate::cluster::{Cluster, ClusterSet};
use crate::error::{Error, Result};
use crate::freq::TermListGroup;
use crate::points::Point;
use crate::source::MSet;

/// Minimal clusterer: the document at rank `i` lands in cluster `i % k`.
///
/// Centroids are not computed; call
/// [`ClusterSet::recalculate_centroids`] if they are needed.
pub struct RoundRobin {
    k: usize,
}

impl RoundRobin {
    /// `k` is the number of clusters to form.
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl Clusterer for RoundRobin {
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

        let tlg = TermListGroup::new(mset);
        let mut cset = ClusterSet::new();
        for _ in 0..self.k {
            cset.add_cluster(Cluster::new());
        }
        for (i, document) in mset.iter().enumerate() {
            let point = Point::new(&tlg, document);
            cset.add_to_cluster(point, i % self.k)?;
        }
        Ok(cset)
    }

    fn description(&self) -> &'static str {
        "Round Robin Clusterer"
    }
}
