//! Academic terms and their upstream `YYYYMM` tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four terms of an academic year.
///
/// Variant order is the order terms are crawled in (fall through summer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Term {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Term {
    /// All terms in crawl order.
    pub const ALL: [Term; 4] = [Term::Fall, Term::Winter, Term::Spring, Term::Summer];

    /// Month suffix the catalog API uses for this term.
    pub fn month(self) -> &'static str {
        match self {
            Term::Fall => "08",
            Term::Winter => "12",
            Term::Spring => "01",
            Term::Summer => "05",
        }
    }

    /// Build the `YYYYMM` token for this term in `year`.
    pub fn token(self, year: i32) -> String {
        format!("{:04}{}", year, self.month())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Term::Fall => "FALL",
            Term::Winter => "WINTER",
            Term::Spring => "SPRING",
            Term::Summer => "SUMMER",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
