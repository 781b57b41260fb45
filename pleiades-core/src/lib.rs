//! Pleiades - document clustering for ranked search results
//!
//! Given a ranked set of retrieved documents (an [`MSet`]), this library
//! partitions them into a requested number of groups, each represented by a
//! centroid in a term-weighted vector space:
//! - TF-IDF weighting with document frequencies aggregated over the result set
//! - Sparse term vectors with cached magnitudes and insertion-order term lists
//! - Pluggable similarity metrics (cosine by default)
//! - Clustering strategies behind a uniform contract: K-Means and Round-Robin
//!
//! Data flow: `MSet` -> `DocumentSource` -> `TermListGroup` -> `Point`s ->
//! `Clusterer` -> `ClusterSet`.
//!
//! The library is synchronous and single-threaded; clustering is bounded by
//! the configured iteration cap and produces deterministic results for a
//! given input and seed.

pub mod cluster;
pub mod clusterer;
pub mod error;
pub mod freq;
pub mod points;
pub mod similarity;
pub mod source;

pub use cluster::{Cluster, ClusterSet};
pub use clusterer::{Clusterer, KMeans, RoundRobin};
pub use error::{Error, Result};
pub use freq::{DummyFreqSource, FreqSource, TermListGroup};
pub use points::{Centroid, Point, TermVector, TermVectorIter};
pub use similarity::{CosineDistance, EuclidianDistance, Similarity};
pub use source::{Document, DocumentSet, DocumentSource, MSet, MSetDocumentSource, TermEntry};

/// Document identifier within the enclosing index
pub type DocId = u32;
/// Count of documents
pub type DocCount = u32;
/// Within-document frequency of a term
pub type TermCount = u32;
/// Term weight in the vector space
pub type Weight = f64;
