//! Similarity metrics over term-weight vectors
//!
//! Every metric reports a similarity, not a distance: larger values mean
//! closer, which is what the clusterers' assignment step maximizes.

use crate::points::TermVector;

/// A pluggable similarity metric between two sparse vectors.
pub trait Similarity {
    /// Similarity between `a` and `b`; higher values mean closer.
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64;

    /// Human-readable name of the metric
    fn description(&self) -> &'static str;
}

impl Similarity for Box<dyn Similarity> {
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64 {
        (**self).similarity(a, b)
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}

/// Cosine of the angle between two vectors: `(a . b) / (|a| * |b|)`.
///
/// In `[0, 1]` for non-negative weights. When either operand has zero
/// magnitude the similarity is 0, never NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDistance;

impl Similarity for CosineDistance {
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64 {
        let denom = a.magnitude() * b.magnitude();
        if denom == 0.0 {
            return 0.0;
        }
        // Walk the smaller term list and probe the other side.
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let mut dot = 0.0;
        for (term, weight) in small.iter() {
            dot += weight * large.get(term);
        }
        dot / denom.sqrt()
    }

    fn description(&self) -> &'static str {
        "Cosine Similarity"
    }
}

/// Euclidean distance folded into a similarity: `1 / (1 + d)`.
///
/// `d` ranges over the union of stored terms, so identical vectors score 1
/// and the score decays toward 0 as the vectors drift apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclidianDistance;

impl Similarity for EuclidianDistance {
    fn similarity(&self, a: &TermVector, b: &TermVector) -> f64 {
        let mut sum = 0.0;
        for (term, weight) in a.iter() {
            let delta = weight - b.get(term);
            sum += delta * delta;
        }
        for (term, weight) in b.iter() {
            if !a.contains(term) {
                sum += weight * weight;
            }
        }
        1.0 / (1.0 + sum.sqrt())
    }

    fn description(&self) -> &'static str {
        "Euclidian Distance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn vector(entries: &[(&str, f64)]) -> TermVector {
        let mut v = TermVector::new();
        for &(term, weight) in entries {
            v.set(term, weight);
        }
        v
    }

    #[test]
    fn test_cosine_disjoint_vectors() {
        let a = vector(&[("x", 3.0), ("y", 1.0)]);
        let b = vector(&[("z", 2.0), ("w", 4.0)]);
        let cosine = CosineDistance;
        assert_eq!(cosine.similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let a = vector(&[("x", 2.0), ("y", 2.0)]);
        let b = vector(&[("x", 2.0), ("y", 2.0)]);
        let cosine = CosineDistance;
        assert!((cosine.similarity(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_self_similarity() {
        let a = vector(&[("a", 0.3), ("b", 1.7), ("c", 0.01)]);
        let cosine = CosineDistance;
        assert!((cosine.similarity(&a, &a) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_symmetry_and_bounds() {
        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("b", 5.0), ("c", 1.0), ("d", 2.0)]);
        let cosine = CosineDistance;

        let ab = cosine.similarity(&a, &b);
        let ba = cosine.similarity(&b, &a);
        assert!((ab - ba).abs() < EPS);
        assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn test_cosine_zero_magnitude_operand() {
        let a = vector(&[("a", 1.0)]);
        let empty = TermVector::new();
        let zero = vector(&[("a", 0.0)]);
        let cosine = CosineDistance;

        assert_eq!(cosine.similarity(&a, &empty), 0.0);
        assert_eq!(cosine.similarity(&empty, &a), 0.0);
        // Stored but all-zero weights also have zero magnitude.
        assert_eq!(cosine.similarity(&a, &zero), 0.0);
    }

    #[test]
    fn test_cosine_known_value() {
        // (1,1) against (1,0): cos 45 degrees.
        let a = vector(&[("x", 1.0), ("y", 1.0)]);
        let b = vector(&[("x", 1.0)]);
        let cosine = CosineDistance;
        assert!((cosine.similarity(&a, &b) - 1.0 / 2.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_euclidian_identical_vectors() {
        let a = vector(&[("x", 1.0), ("y", 2.0)]);
        let euclidian = EuclidianDistance;
        assert!((euclidian.similarity(&a, &a) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_euclidian_known_value() {
        // Distance between (3,0) and (0,4) is 5.
        let a = vector(&[("x", 3.0)]);
        let b = vector(&[("y", 4.0)]);
        let euclidian = EuclidianDistance;
        assert!((euclidian.similarity(&a, &b) - 1.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_euclidian_symmetry() {
        let a = vector(&[("a", 1.0), ("b", 2.0)]);
        let b = vector(&[("b", 1.0), ("c", 3.0)]);
        let euclidian = EuclidianDistance;
        assert!((euclidian.similarity(&a, &b) - euclidian.similarity(&b, &a)).abs() < EPS);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(CosineDistance.description(), "Cosine Similarity");
        assert_eq!(EuclidianDistance.description(), "Euclidian Distance");
    }
}
