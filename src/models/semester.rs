//! Per-term course membership for a single reference year.

use std::collections::{HashMap, HashSet};

use crate::models::Term;

/// Which course codes were offered in each term of a reference year.
///
/// Built once per ingestion run and read-only afterwards. An index built from
/// successful lookups stays available even when every term list is empty.
#[derive(Debug, Clone, Default)]
pub struct SemesterIndex {
    year: Option<i32>,
    terms: HashMap<Term, HashSet<String>>,
}

impl SemesterIndex {
    /// An index with no membership data for any term.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from one code list per term.
    pub fn new<I, C>(year: i32, terms: I) -> Self
    where
        I: IntoIterator<Item = (Term, C)>,
        C: IntoIterator<Item = String>,
    {
        Self {
            year: Some(year),
            terms: terms
                .into_iter()
                .map(|(term, codes)| (term, codes.into_iter().collect()))
                .collect(),
        }
    }

    /// Whether membership data was retrieved for the reference year.
    pub fn is_available(&self) -> bool {
        self.year.is_some()
    }

    /// Whether `course_id` was offered in `term`.
    pub fn contains(&self, term: Term, course_id: &str) -> bool {
        self.terms
            .get(&term)
            .is_some_and(|codes| codes.contains(course_id))
    }

    /// Number of course codes recorded for `term`.
    pub fn term_len(&self, term: Term) -> usize {
        self.terms.get(&term).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let index = SemesterIndex::new(
            2023,
            [
                (Term::Fall, vec!["CMSC250".to_string(), "ENGL101".to_string()]),
                (Term::Spring, vec!["ENGL101".to_string()]),
            ],
        );
        assert!(index.is_available());
        assert!(index.contains(Term::Fall, "CMSC250"));
        assert!(!index.contains(Term::Spring, "CMSC250"));
        assert!(!index.contains(Term::Winter, "ENGL101"));
        assert_eq!(index.term_len(Term::Fall), 2);
        assert_eq!(index.term_len(Term::Summer), 0);
    }

    #[test]
    fn test_all_terms_empty_is_still_available() {
        let index = SemesterIndex::new(2023, Term::ALL.map(|t| (t, Vec::<String>::new())));
        assert!(index.is_available());
        assert_eq!(index.term_len(Term::Fall), 0);
    }

    #[test]
    fn test_empty() {
        let index = SemesterIndex::empty();
        assert!(!index.is_available());
        assert!(!index.contains(Term::Fall, "CMSC250"));
    }
}
