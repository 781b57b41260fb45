//! Clustering strategies
//!
//! Every strategy implements the same one-shot [`Clusterer`] contract:
//! take a ranked [`MSet`], return a [`ClusterSet`]. Results depend only on
//! the arguments (and any configured seed), so repeated calls reproduce the
//! same partition.

mod kmeans;
mod round_robin;


pub use kmeans::KMeans;
pub use round_robin::RoundRobin;

use crate::Result;
use crate::cluster::ClusterSet;
use crate::source::MSet;

/// A strategy that partitions a ranked document set into clusters.
pub trait Clusterer {
    /// Partition `mset` into clusters.
    fn cluster(&self, mset: &MSet) -> Result<ClusterSet>;

    /// Human-readable name of the strategy
    fn description(&self) -> &'static str;
}

impl Clusterer for Box<dyn Clusterer> {
    fn cluster(&self, mset: &MSet) -> Result<ClusterSet> {
        (**self).cluster(mset)
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}
