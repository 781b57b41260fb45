//! Points and centroids in the term-weight vector space
//!
//! Both are thin wrappers around the same sparse [`TermVector`] value: a
//! [`Point`] ties the vector to the document it projects, a [`Centroid`]
//! carries nothing extra. Similarity metrics and centroid arithmetic operate
//! on the vector view, so the two interoperate freely.

mod vector;

pub use vector::{TermVector, TermVectorIter};

use log::warn;

use crate::DocId;
use crate::freq::FreqSource;
use crate::source::Document;

/// A document projected into the term-weight vector space.
///
/// Holds the document handle alongside the TF-IDF vector; the underlying
/// document storage stays with the enclosing index.
#[derive(Debug, Clone)]
pub struct Point {
    docid: DocId,
    vector: TermVector,
}

impl Point {
    /// Project `document` using the statistics in `freqs`.
    ///
    /// For every distinct term: `tf = 1 + ln(max(wdf, 1))` and
    /// `idf = ln(N / df)` where `N` is the source's document count. Every
    /// term is stored, including those whose weight comes out 0. A term the
    /// frequency source has never seen gets an idf of 0 rather than a
    /// division by zero.
    pub fn new(freqs: &dyn FreqSource, document: &Document) -> Self {
        let doccount = freqs.doccount() as f64;
        let mut vector = TermVector::new();
        for entry in document.term_entries() {
            let wdf = entry.wdf.max(1) as f64;
            let tf = 1.0 + wdf.ln();
            let df = freqs.termfreq(&entry.term) as f64;
            let idf = if df > 0.0 {
                (doccount / df).ln()
            } else {
                warn!(
                    "term {:?} missing from frequency source, assigning zero weight",
                    entry.term
                );
                0.0
            };
            vector.set(&entry.term, tf * idf);
        }
        Self {
            docid: document.docid(),
            vector,
        }
    }

    /// Handle of the document this point projects
    pub fn document(&self) -> DocId {
        self.docid
    }

    pub fn vector(&self) -> &TermVector {
        &self.vector
    }
}

impl std::ops::Deref for Point {
    type Target = TermVector;

    fn deref(&self) -> &TermVector {
        &self.vector
    }
}

/// A cluster representative: the mean position of the points assigned to it.
#[derive(Debug, Clone, Default)]
pub struct Centroid {
    vector: TermVector,
}

impl Centroid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centroid sitting exactly on `point`
    pub fn from_point(point: &Point) -> Self {
        let mut centroid = Self::new();
        centroid.set_to_point(point);
        centroid
    }

    /// Copy every term weight (and the cached magnitude) from `point`.
    pub fn set_to_point(&mut self, point: &Point) {
        self.vector = point.vector().clone();
    }

    pub fn vector(&self) -> &TermVector {
        &self.vector
    }
}

impl std::ops::Deref for Centroid {
    type Target = TermVector;

    fn deref(&self) -> &TermVector {
        &self.vector
    }
}

impl std::ops::DerefMut for Centroid {
    fn deref_mut(&mut self) -> &mut TermVector {
        &mut self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::{DummyFreqSource, TermListGroup};
    use crate::source::MSet;

    const EPS: f64 = 1e-12;

    fn doc(docid: DocId, terms: &[(&str, u32)]) -> Document {
        let mut d = Document::new(docid);
        for &(term, wdf) in terms {
            d.add_term(term, wdf);
        }
        d
    }

    #[test]
    fn test_point_tfidf_weights() {
        // "rare" indexes one of two documents, "common" both.
        let mset: MSet = vec![
            doc(0, &[("rare", 3), ("common", 1)]),
            doc(1, &[("common", 2)]),
        ]
        .into();
        let tlg = TermListGroup::new(&mset);
        let point = Point::new(&tlg, mset.get(0).unwrap());

        let expected_rare = (1.0 + 3.0_f64.ln()) * (2.0_f64 / 1.0).ln();
        assert!((point.get("rare") - expected_rare).abs() < EPS);
        // df == doccount makes the idf (and the weight) exactly zero.
        assert!(point.get("common").abs() < EPS);
        assert!((point.magnitude() - expected_rare * expected_rare).abs() < EPS);
        assert_eq!(point.document(), 0);
    }

    #[test]
    fn test_point_stores_zero_weight_terms() {
        let mset: MSet = vec![doc(0, &[("everywhere", 1)]), doc(1, &[("everywhere", 4)])].into();
        let tlg = TermListGroup::new(&mset);
        let point = Point::new(&tlg, mset.get(1).unwrap());

        assert!(point.contains("everywhere"));
        assert!(point.get("everywhere").abs() < EPS);
        assert!(point.magnitude().abs() < EPS);
    }

    #[test]
    fn test_point_unseen_term_gets_zero_weight() {
        // A frequency source built over a different document set.
        let other: MSet = vec![doc(5, &[("elsewhere", 1)])].into();
        let tlg = TermListGroup::new(&other);
        let point = Point::new(&tlg, &doc(0, &[("novel", 2)]));

        assert!(point.contains("novel"));
        assert!(point.get("novel").abs() < EPS);
    }

    #[test]
    fn test_point_with_dummy_freq_source() {
        // doccount == termfreq == 1, so idf is 0 for every term.
        let point = Point::new(&DummyFreqSource, &doc(0, &[("a", 2), ("b", 1)]));
        assert_eq!(point.len(), 2);
        assert!(point.magnitude().abs() < EPS);
    }

    #[test]
    fn test_centroid_set_to_point_copies_magnitude() {
        let mset: MSet = vec![doc(0, &[("x", 2), ("y", 1)]), doc(1, &[("z", 1)])].into();
        let tlg = TermListGroup::new(&mset);
        let point = Point::new(&tlg, mset.get(0).unwrap());

        let centroid = Centroid::from_point(&point);
        assert_eq!(centroid.len(), point.len());
        assert!((centroid.magnitude() - point.magnitude()).abs() < EPS);
        for (term, weight) in point.iter() {
            assert!((centroid.get(term) - weight).abs() < EPS);
        }
    }

    #[test]
    fn test_centroid_divide_then_recalc() {
        let mut centroid = Centroid::new();
        centroid.add("a", 2.0);
        centroid.add("b", 6.0);
        centroid.divide(2.0);
        centroid.recalc_magnitude();

        assert!((centroid.get("a") - 1.0).abs() < EPS);
        assert!((centroid.get("b") - 3.0).abs() < EPS);
        assert!((centroid.magnitude() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_centroid_clear() {
        let mut centroid = Centroid::new();
        centroid.add("a", 1.5);
        centroid.clear();
        assert!(centroid.is_empty());
        assert_eq!(centroid.magnitude(), 0.0);
    }
}
