//! Sparse term-weight vectors

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::{DocCount, TermCount, Weight};

/// A sparse term -> weight mapping with a cached squared magnitude.
///
/// The weight map is backed by an insertion-ordered term list, which is the
/// only order iteration ever exposes; hash-map order never leaks. The cached
/// magnitude equals the sum of squared stored weights after every mutation
/// except [`divide`](TermVector::divide), which deliberately leaves it stale
/// until [`recalc_magnitude`](TermVector::recalc_magnitude).
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    weights: FxHashMap<String, Weight>,
    terms: Vec<String>,
    magnitude: Weight,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight stored for `term`, or 0.0 when absent
    pub fn get(&self, term: &str) -> Weight {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Replace the weight of `term`, inserting it if absent.
    pub fn set(&mut self, term: &str, weight: Weight) {
        if let Some(stored) = self.weights.get_mut(term) {
            self.magnitude += weight * weight - *stored * *stored;
            *stored = weight;
        } else {
            self.weights.insert(term.to_string(), weight);
            self.terms.push(term.to_string());
            self.magnitude += weight * weight;
        }
    }

    /// Add `weight` to the stored weight of `term`, inserting it if absent.
    pub fn add(&mut self, term: &str, weight: Weight) {
        if let Some(stored) = self.weights.get_mut(term) {
            let updated = *stored + weight;
            self.magnitude += updated * updated - *stored * *stored;
            *stored = updated;
        } else {
            self.weights.insert(term.to_string(), weight);
            self.terms.push(term.to_string());
            self.magnitude += weight * weight;
        }
    }

    /// Number of stored terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Cached squared magnitude (sum of squared stored weights)
    pub fn magnitude(&self) -> Weight {
        self.magnitude
    }

    /// Recompute the cached magnitude from the stored weights.
    pub fn recalc_magnitude(&mut self) {
        self.magnitude = self.weights.values().map(|w| w * w).sum();
    }

    /// Divide every stored weight by `n`.
    ///
    /// The cached magnitude is NOT refreshed; callers that will consult it
    /// must invoke `recalc_magnitude` afterwards.
    pub fn divide(&mut self, n: Weight) {
        for weight in self.weights.values_mut() {
            *weight /= n;
        }
    }

    /// Drop every term, weight and the cached magnitude.
    pub fn clear(&mut self) {
        self.weights.clear();
        self.terms.clear();
        self.magnitude = 0.0;
    }

    /// Iterate `(term, weight)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.terms
            .iter()
            .map(move |term| (term.as_str(), self.weights[term]))
    }

    /// Forward cursor over the stored terms in insertion order
    pub fn term_iter(&self) -> TermVectorIter<'_> {
        TermVectorIter {
            terms: &self.terms,
            pos: 0,
        }
    }
}

/// Forward cursor over a vector's stored terms in insertion order.
///
/// Stored entries always carry a wdf of 1; positional and collection-level
/// statistics are not recorded for point vectors and the corresponding
/// accessors fail with [`Error::Unimplemented`].
pub struct TermVectorIter<'a> {
    terms: &'a [String],
    pos: usize,
}

impl<'a> TermVectorIter<'a> {
    pub fn at_end(&self) -> bool {
        self.pos >= self.terms.len()
    }

    /// Advance to the first entry equal to `term`.
    ///
    /// When no such entry exists at or after the current position the cursor
    /// runs to the end.
    pub fn skip_to(&mut self, term: &str) {
        while let Some(current) = self.terms.get(self.pos) {
            if current == term {
                return;
            }
            self.pos += 1;
        }
    }

    /// Within-document frequency of the current entry
    pub fn wdf(&self) -> TermCount {
        1
    }

    pub fn positions(&self) -> Result<Vec<u32>> {
        Err(Error::Unimplemented(
            "point term iterators do not support positions()",
        ))
    }

    pub fn termfreq(&self) -> Result<DocCount> {
        Err(Error::Unimplemented(
            "point term iterators do not support termfreq()",
        ))
    }
}

impl<'a> Iterator for TermVectorIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let term = self.terms.get(self.pos)?;
        self.pos += 1;
        Some(term.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.terms.len() - self.pos;
        (remaining, Some(remaining))
    }
}
