//! Search criteria compilation.
//!
//! Turns the loosely-typed query string of a search request into a
//! [`RecipeFilter`]: a conjunction of field-level [`Predicate`]s. Compilation
//! never fails. Absent or empty parameters produce no predicate, unknown
//! or repeated parameters are ignored, and malformed range tokens are
//! dropped by [`parse_range`].

use crate::range::{parse_range, RangeExpr};

/// Nutrient key searched by the `calories` parameter.
pub const CALORIES_KEY: &str = "calories";

/// Raw search parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    /// Range expression, e.g. `gte:4.5`.
    pub rating: Option<String>,
    /// Range expression in minutes, e.g. `lte:30`.
    pub total_time: Option<String>,
    /// Substring of the text stored at `nutrients.calories`.
    pub calories: Option<String>,
}

impl SearchCriteria {
    /// Collect criteria from decoded query-string pairs. When a key repeats,
    /// the first occurrence wins; unknown keys are skipped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut criteria.title,
                "cuisine" => &mut criteria.cuisine,
                "rating" => &mut criteria.rating,
                "total_time" => &mut criteria.total_time,
                "calories" => &mut criteria.calories,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        criteria
    }
}

/// Text columns searchable by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Cuisine,
}

impl TextField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Cuisine => "cuisine",
        }
    }
}

/// Numeric columns filterable by range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Rating,
    TotalTime,
}

impl NumericField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::TotalTime => "total_time",
        }
    }
}

/// A single field-level match condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive, unanchored substring match on a text column.
    Contains { field: TextField, needle: String },
    /// Numeric comparison on a nullable numeric column.
    Compare { field: NumericField, range: RangeExpr },
    /// Case-insensitive substring match on the text value stored under
    /// `key` in the `nutrients` document.
    NutrientContains { key: String, needle: String },
}

/// Logical AND of zero or more predicates. Empty matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    predicates: Vec<Predicate>,
}

impl RecipeFilter {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Compile raw search criteria into a conjunction.
    pub fn compile(criteria: &SearchCriteria) -> Self {
        let contains = |field: TextField, raw: &Option<String>| {
            non_empty(raw).map(|needle| Predicate::Contains {
                field,
                needle: needle.to_string(),
            })
        };
        let compare = |field: NumericField, raw: &Option<String>| {
            non_empty(raw)
                .and_then(parse_range)
                .map(|range| Predicate::Compare { field, range })
        };
        let nutrient = non_empty(&criteria.calories).map(|needle| Predicate::NutrientContains {
            key: CALORIES_KEY.to_string(),
            needle: needle.to_string(),
        });

        let predicates = [
            contains(TextField::Title, &criteria.title),
            contains(TextField::Cuisine, &criteria.cuisine),
            compare(NumericField::Rating, &criteria.rating),
            compare(NumericField::TotalTime, &criteria.total_time),
            nutrient,
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { predicates }
    }
}

fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

/// Case-insensitive literal substring test used by in-process evaluation.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape `%`, `_` and `\` so a needle is matched literally by `ILIKE`.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build an unanchored `ILIKE` pattern for a literal needle.
pub fn like_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}
