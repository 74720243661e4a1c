//! Course data structure as fetched from the catalog and enriched by the pipeline.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Term;

/// A course offered by the university.
///
/// Two courses are equal when their codes match, regardless of any other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code: 4 letters, 3 digits, optional suffix (e.g. `CMSC250H`)
    pub course_id: String,

    /// Full course title
    #[serde(default)]
    pub name: String,

    /// Owning department code (first 4 letters of the course code)
    #[serde(default)]
    pub dept_id: String,

    #[serde(default, deserialize_with = "de_credits")]
    pub credits: u32,

    /// General Education groups: outer list is OR, inner list is AND.
    ///
    /// A token of the form `TOKEN|COURSE` only counts when taken with `COURSE`.
    #[serde(default, rename = "gen_ed", deserialize_with = "de_null_default")]
    pub gen_eds: Vec<Vec<String>>,

    #[serde(default)]
    pub average_gpa: Gpa,

    /// Terms the course was offered in during the reference year
    #[serde(default)]
    pub semesters: BTreeSet<Term>,

    #[serde(default, deserialize_with = "de_null_default")]
    pub relationships: Relationships,
}

impl Course {
    /// Create a bare course with only its code set.
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: String::new(),
            dept_id: String::new(),
            credits: 0,
            gen_eds: Vec::new(),
            average_gpa: Gpa::Unknown,
            semesters: BTreeSet::new(),
            relationships: Relationships::default(),
        }
    }

    /// Set `dept_id` from the course code when upstream left it blank.
    pub fn fill_department(&mut self) {
        if self.dept_id.is_empty() {
            self.dept_id = self.course_id.chars().take(4).collect();
        }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.course_id == other.course_id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.course_id.hash(state);
    }
}

/// Free-text relationships a course has with others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub prereqs: Option<String>,
    #[serde(default)]
    pub coreqs: Option<String>,
    #[serde(default)]
    pub restrictions: Option<String>,
    #[serde(default)]
    pub credit_granted_for: Option<String>,
}

/// Average GPA of a course.
///
/// Serialized as a plain number, with `Unknown` collapsing to `0.0`. Reading
/// a serialized value maps the sentinel back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gpa {
    Known(f64),
    #[default]
    Unknown,
}

impl Gpa {
    /// Sentinel written out when no grade data exists.
    pub const SENTINEL: f64 = 0.0;

    /// Interpret a value reported by the grades source.
    ///
    /// Missing, negative and non-finite values are treated as no data.
    pub fn from_reported(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => Gpa::Known(v),
            _ => Gpa::Unknown,
        }
    }

    /// Value with the sentinel substituted for `Unknown`.
    pub fn value(self) -> f64 {
        match self {
            Gpa::Known(v) => v,
            Gpa::Unknown => Self::SENTINEL,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Gpa::Known(_))
    }
}

impl Serialize for Gpa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Gpa {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<f64>::deserialize(deserializer)? {
            Some(v) if v == Self::SENTINEL => Gpa::Unknown,
            reported => Gpa::from_reported(reported),
        })
    }
}

/// Credits arrive as a string (`"3"`, sometimes a range like `"1-3"`) or a number.
///
/// Ranges keep their lower bound and fractional numbers are truncated;
/// negative or unparsable values become 0.
fn de_credits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => n,
        Some(Raw::Float(f)) if (0.0..=f64::from(u32::MAX)).contains(&f) => f as u32,
        Some(Raw::Float(_)) => 0,
        Some(Raw::Text(s)) => s
            .split('-')
            .next()
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or(0),
        None => 0,
    })
}

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPSTREAM: &str = r#"{
        "course_id": "AOSC200",
        "semester": "202308",
        "name": "Weather and Climate",
        "dept_id": "AOSC",
        "department": "Atmospheric and Oceanic Science",
        "credits": "3",
        "description": "An introduction to the atmosphere.",
        "gen_ed": [["DSNS"], ["DSNL|AOSC201"]],
        "relationships": {
            "coreqs": null,
            "prereqs": "MATH115",
            "formerly": null,
            "restrictions": null,
            "additional_info": null,
            "also_offered_as": null,
            "credit_granted_for": "AOSC200 or METO200"
        },
        "sections": []
    }"#;

    #[test]
    fn test_deserialize_upstream_record() {
        let course: Course = serde_json::from_str(UPSTREAM).unwrap();
        assert_eq!(course.course_id, "AOSC200");
        assert_eq!(course.dept_id, "AOSC");
        assert_eq!(course.credits, 3);
        assert_eq!(course.gen_eds.len(), 2);
        assert_eq!(course.relationships.prereqs.as_deref(), Some("MATH115"));
        assert_eq!(course.relationships.coreqs, None);
        assert_eq!(course.average_gpa, Gpa::Unknown);
        assert!(course.semesters.is_empty());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let course: Course =
            serde_json::from_str(r#"{"course_id": "ENGL101", "gen_ed": null, "credits": "1-3"}"#)
                .unwrap();
        assert_eq!(course.credits, 1);
        assert!(course.gen_eds.is_empty());
        assert_eq!(course.relationships, Relationships::default());
    }

    #[test]
    fn test_numeric_credits() {
        let parse = |credits: &str| -> u32 {
            let json = format!(r#"{{"course_id": "MATH140", "credits": {credits}}}"#);
            serde_json::from_str::<Course>(&json).unwrap().credits
        };
        assert_eq!(parse("4"), 4);
        assert_eq!(parse("3.0"), 3);
        assert_eq!(parse("-1"), 0);
        assert_eq!(parse("null"), 0);
    }

    #[test]
    fn test_odd_credits_do_not_fail_page() {
        let page: Vec<Course> = serde_json::from_str(
            r#"[{"course_id": "CMSC131", "credits": -2}, {"course_id": "CMSC132", "credits": 4.5}]"#,
        )
        .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].credits, 4);
    }

    #[test]
    fn test_equality_by_code_only() {
        let mut a = Course::new("CMSC250");
        a.name = "Discrete Structures".into();
        let b = Course::new("CMSC250");
        assert_eq!(a, b);
        assert_ne!(a, Course::new("CMSC251"));
    }

    #[test]
    fn test_fill_department() {
        let mut course = Course::new("HIST999");
        course.fill_department();
        assert_eq!(course.dept_id, "HIST");

        let mut kept = Course::new("CMSC250");
        kept.dept_id = "CMSC".into();
        kept.fill_department();
        assert_eq!(kept.dept_id, "CMSC");
    }

    #[test]
    fn test_gpa_serializes_to_sentinel() {
        let mut course = Course::new("HIST999");
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["average_gpa"], 0.0);

        course.average_gpa = Gpa::Known(3.1);
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["average_gpa"], 3.1);
    }

    #[test]
    fn test_sentinel_reads_back_as_unknown() {
        let stored = serde_json::to_string(&Course::new("HIST999")).unwrap();
        let course: Course = serde_json::from_str(&stored).unwrap();
        assert_eq!(course.average_gpa, Gpa::Unknown);

        let course: Course =
            serde_json::from_str(r#"{"course_id": "CMSC250", "average_gpa": 3.1}"#).unwrap();
        assert_eq!(course.average_gpa, Gpa::Known(3.1));
    }

    #[test]
    fn test_gpa_from_reported() {
        assert_eq!(Gpa::from_reported(Some(2.75)), Gpa::Known(2.75));
        assert_eq!(Gpa::from_reported(None), Gpa::Unknown);
        assert_eq!(Gpa::from_reported(Some(-1.0)), Gpa::Unknown);
        assert_eq!(Gpa::from_reported(Some(f64::NAN)), Gpa::Unknown);
        assert_eq!(Gpa::Unknown.value(), 0.0);
    }
}
