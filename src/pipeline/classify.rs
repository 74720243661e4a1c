// src/pipeline/classify.rs

//! Offering-pattern inference from the semester index.

use std::collections::BTreeSet;

use crate::models::{SemesterIndex, Term};

/// Terms of the reference year in which `course_id` was offered.
///
/// An empty index classifies every course as offered in no term.
pub fn classify(course_id: &str, index: &SemesterIndex) -> BTreeSet<Term> {
    Term::ALL
        .into_iter()
        .filter(|&term| index.contains(term, course_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SemesterIndex {
        SemesterIndex::new(
            2023,
            [
                (Term::Fall, vec!["CMSC250".to_string(), "ENGL101".to_string()]),
                (Term::Winter, vec![]),
                (Term::Spring, vec!["ENGL101".to_string()]),
                (Term::Summer, vec!["ENGL101".to_string()]),
            ],
        )
    }

    #[test]
    fn test_single_term() {
        assert_eq!(classify("CMSC250", &index()), BTreeSet::from([Term::Fall]));
    }

    #[test]
    fn test_multiple_terms_in_canonical_order() {
        let terms: Vec<_> = classify("ENGL101", &index()).into_iter().collect();
        assert_eq!(terms, [Term::Fall, Term::Spring, Term::Summer]);
    }

    #[test]
    fn test_unknown_course() {
        assert!(classify("MATH140", &index()).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let empty = SemesterIndex::empty();
        for code in ["CMSC250", "ENGL101", "", "not a code"] {
            assert!(classify(code, &empty).is_empty());
        }
    }
}
