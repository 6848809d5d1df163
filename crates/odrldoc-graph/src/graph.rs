//! In-memory triple store and the read-only query interface the page
//! generator depends on.

use crate::term::{Term, Triple};
use crate::vocab::rdf;
use std::collections::HashSet;

/// Read-only pattern lookups over a set of triples.
///
/// Implementations return objects and subjects in store order. Callers that
/// need stable output across stores must sort themselves.
pub trait GraphQuery {
    /// First object of `(subject, predicate, ?)`, if any
    fn value_of(&self, subject: &Term, predicate: &str) -> Option<&Term>;

    /// Every object of `(subject, predicate, ?)`
    fn objects_of(&self, subject: &Term, predicate: &str) -> Vec<&Term>;

    /// Distinct subjects of `(?, rdf:type, class)`, in first-seen order
    fn subjects_of_type(&self, class: &str) -> Vec<&Term>;
}

/// An insertion-ordered set of triples.
///
/// Re-asserting a triple is a no-op, so the same statement coming from two
/// input files is stored once. Lookups are linear scans; catalog graphs are
/// small enough that an index would not pay for itself.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple, returning `false` if the graph already held it
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: impl Into<String>, o: Term) -> bool {
        self.add(Triple::new(s, p, o))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl GraphQuery for Graph {
    fn value_of(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.triples
            .iter()
            .find(|t| t.p == predicate && &t.s == subject)
            .map(|t| &t.o)
    }

    fn objects_of(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| t.p == predicate && &t.s == subject)
            .map(|t| &t.o)
            .collect()
    }

    fn subjects_of_type(&self, class: &str) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = Vec::new();
        for triple in &self.triples {
            if triple.p != rdf::TYPE {
                continue;
            }
            if !matches!(&triple.o, Term::Iri(iri) if iri == class) {
                continue;
            }
            if !subjects.contains(&&triple.s) {
                subjects.push(&triple.s);
            }
        }
        subjects
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.add(triple);
        }
    }
}
