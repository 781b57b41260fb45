//! Documents, ranked sets and document sources
//!
//! The clustering core never reads raw text: documents arrive as finite
//! streams of `(term, wdf)` entries, either directly from an [`MSet`] or
//! through the lazier [`DocumentSource`] contract.

use serde::{Deserialize, Serialize};

use crate::{DocCount, DocId, TermCount};

/// A term and its within-document frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub wdf: TermCount,
}

/// A document handle: an identifier into the enclosing index plus the
/// document's term stream.
///
/// Entries are unique per document: [`add_term`](Document::add_term)
/// accumulates the wdf of a repeated term into the existing entry, so
/// enumeration yields each distinct term exactly once, in first-insertion
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    docid: DocId,
    entries: Vec<TermEntry>,
}

impl Document {
    pub fn new(docid: DocId) -> Self {
        Self {
            docid,
            entries: Vec::new(),
        }
    }

    pub fn docid(&self) -> DocId {
        self.docid
    }

    /// Record `wdf` occurrences of `term` in this document.
    ///
    /// A wdf of 0 is stored as 1; repeated terms accumulate.
    pub fn add_term(&mut self, term: impl Into<String>, wdf: TermCount) {
        let term = term.into();
        let wdf = wdf.max(1);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.term == term) {
            entry.wdf += wdf;
        } else {
            self.entries.push(TermEntry { term, wdf });
        }
    }

    /// Distinct `(term, wdf)` entries in first-insertion order.
    pub fn term_entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A ranked list of retrieved documents, as produced by the enclosing
/// search engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MSet {
    documents: Vec<Document>,
}

impl MSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document at the next rank
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at rank `index`
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Iterate documents in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl From<Vec<Document>> for MSet {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl FromIterator<Document> for MSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// A finite, non-restartable stream of documents.
///
/// `next_document` returns `None` exactly when `at_end` is true; `size` is
/// the total number of documents the stream will produce.
pub trait DocumentSource {
    fn next_document(&mut self) -> Option<Document>;

    fn at_end(&self) -> bool;

    /// Total stream length (produced + remaining)
    fn size(&self) -> DocCount;
}

/// Adapts an [`MSet`] to the [`DocumentSource`] contract, yielding documents
/// in rank order.
pub struct MSetDocumentSource<'a> {
    mset: &'a MSet,
    cursor: usize,
    limit: usize,
}

impl<'a> MSetDocumentSource<'a> {
    pub fn new(mset: &'a MSet) -> Self {
        Self {
            mset,
            cursor: 0,
            limit: mset.len(),
        }
    }

    /// Clip the stream to at most `maxitems` documents.
    pub fn with_limit(mut self, maxitems: DocCount) -> Self {
        self.limit = self.limit.min(maxitems as usize);
        self
    }
}

impl DocumentSource for MSetDocumentSource<'_> {
    fn next_document(&mut self) -> Option<Document> {
        if self.at_end() {
            return None;
        }
        let document = self.mset.get(self.cursor).cloned();
        self.cursor += 1;
        document
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.limit
    }

    fn size(&self) -> DocCount {
        self.limit as DocCount
    }
}

/// Ordered collection of document handles, as returned by
/// [`Cluster::documents`](crate::cluster::Cluster::documents).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    docs: Vec<DocId>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, docid: DocId) {
        self.docs.push(docid);
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DocId> {
        self.docs.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.docs.iter().copied()
    }
}

impl std::ops::Index<usize> for DocumentSet {
    type Output = DocId;

    fn index(&self, index: usize) -> &DocId {
        &self.docs[index]
    }
}
