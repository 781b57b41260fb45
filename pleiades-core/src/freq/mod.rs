//! Document-frequency sources
//!
//! A [`FreqSource`] answers "how many documents contain this term?" for the
//! IDF half of TF-IDF weighting. [`TermListGroup`] aggregates the statistic
//! over a document stream; [`DummyFreqSource`] is a placeholder for contexts
//! where corpus statistics are unavailable.

use log::debug;
use rustc_hash::FxHashMap;

use crate::DocCount;
use crate::source::{DocumentSource, MSet, MSetDocumentSource};

/// Per-term document frequencies over a set of documents.
pub trait FreqSource {
    /// Number of documents containing `term`; 0 for a term never seen.
    fn termfreq(&self, term: &str) -> DocCount;

    /// Total number of documents behind this source.
    fn doccount(&self) -> DocCount;
}

/// Document frequencies aggregated by scanning a document stream once.
///
/// Each distinct term in a document bumps its frequency by exactly one;
/// within-document frequency is irrelevant here. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TermListGroup {
    termfreq: FxHashMap<String, DocCount>,
    doccount: DocCount,
}

impl TermListGroup {
    /// Aggregate over an [`MSet`] in rank order.
    pub fn new(mset: &MSet) -> Self {
        Self::from_source(&mut MSetDocumentSource::new(mset))
    }

    /// Aggregate by draining a [`DocumentSource`].
    pub fn from_source(source: &mut dyn DocumentSource) -> Self {
        let mut termfreq: FxHashMap<String, DocCount> = FxHashMap::default();
        let mut doccount = 0;
        while let Some(document) = source.next_document() {
            // Document entries are unique, so each distinct term counts once.
            for entry in document.term_entries() {
                *termfreq.entry(entry.term.clone()).or_insert(0) += 1;
            }
            doccount += 1;
        }
        debug!(
            "term list group built: {} documents, {} distinct terms",
            doccount,
            termfreq.len()
        );
        Self { termfreq, doccount }
    }

    /// Number of distinct terms seen across all documents
    pub fn distinct_terms(&self) -> usize {
        self.termfreq.len()
    }
}

impl FreqSource for TermListGroup {
    fn termfreq(&self, term: &str) -> DocCount {
        self.termfreq.get(term).copied().unwrap_or(0)
    }

    fn doccount(&self) -> DocCount {
        self.doccount
    }
}

/// Frequency source reporting 1 for every term over a single document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyFreqSource;

impl FreqSource for DummyFreqSource {
    fn termfreq(&self, _term: &str) -> DocCount {
        1
    }

    fn doccount(&self) -> DocCount {
        1
    }
}
