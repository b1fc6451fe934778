//! Recipe ingestion: lenient input parsing, numeric normalization and
//! title validation shared by the create endpoint and the bulk importer.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;

/// Free-form nutrient name to text value mapping (`"calories": "389 kcal"`).
///
/// No key set is enforced; a missing nutrient is simply absent.
pub type Nutrients = BTreeMap<String, String>;

/// Message returned when a recipe is submitted without a title.
pub const TITLE_REQUIRED: &str = "Recipe title is required.";

/// Raw recipe payload as submitted by a client or found in an import file.
///
/// Numeric fields accept numbers or numeric strings. Anything else
/// (`"NaN"`, `"n/a"`, booleans, objects) is read as absent. Text fields
/// accept strings or numbers (`"serves": 4` reads as `"4"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub prep_time: Option<i32>,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub cook_time: Option<i32>,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub total_time: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub serves: Option<String>,
    #[serde(default, deserialize_with = "lenient_nutrients")]
    pub nutrients: Option<Nutrients>,
}

/// A normalized recipe ready to be persisted.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewRecipe {
    #[validate(length(min = 1))]
    pub title: String,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub serves: Option<String>,
    pub nutrients: Option<Nutrients>,
}

impl NewRecipe {
    /// A recipe with only a title; remaining fields unset.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cuisine: None,
            rating: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            description: None,
            serves: None,
            nutrients: None,
        }
    }

    /// Reject records that may not be persisted.
    ///
    /// Stores call this before every insert. A non-finite rating is
    /// normalized rather than rejected, so it is not checked here.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(TITLE_REQUIRED.to_string()))
    }
}

impl TryFrom<RecipeInput> for NewRecipe {
    type Error = CoreError;

    fn try_from(input: RecipeInput) -> Result<Self, Self::Error> {
        let title = input
            .title
            .ok_or_else(|| CoreError::Validation(TITLE_REQUIRED.to_string()))?;

        let recipe = NewRecipe {
            title,
            cuisine: input.cuisine,
            rating: input.rating.filter(|r| r.is_finite()),
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            total_time: input.total_time,
            description: input.description,
            serves: input.serves,
            nutrients: input.nutrients,
        };
        recipe.ensure_valid()?;
        Ok(recipe)
    }
}

// ---------------------------------------------------------------------------
// Numeric normalization
// ---------------------------------------------------------------------------

/// Read a JSON value as a finite float.
///
/// Numbers pass through; strings are trimmed and parsed. `"NaN"`,
/// infinities, empty strings and every other JSON type yield `None`.
pub fn clean_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Read a JSON value as a non-negative whole number of minutes.
///
/// Fractional minutes are rounded to the nearest minute. Negative or
/// out-of-range values yield `None`.
pub fn clean_minutes(value: &Value) -> Option<i32> {
    clean_number(value)
        .map(f64::round)
        .filter(|n| *n >= 0.0 && *n <= f64::from(i32::MAX))
        .map(|n| n as i32)
}

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(clean_number))
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(clean_minutes))
}

/// Text form of a scalar JSON value: strings as-is, numbers in their
/// decimal form. Booleans, arrays, objects and null yield `None`.
pub fn clean_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(clean_text))
}

/// Accept a nutrients object whose values are strings or numbers. Numbers
/// are kept as their text form; nested values and nulls are dropped. Any
/// non-object value reads as absent.
fn lenient_nutrients<'de, D>(deserializer: D) -> Result<Option<Nutrients>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(None);
    };
    let nutrients = map
        .into_iter()
        .filter_map(|(key, value)| clean_text(value).map(|text| (key, text)))
        .collect();
    Ok(Some(nutrients))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> RecipeInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nan_string_rating_becomes_none() {
        let input = parse(json!({"title": "Pie", "rating": "NaN"}));
        assert_eq!(input.rating, None);
        let recipe = NewRecipe::try_from(input).unwrap();
        assert_eq!(recipe.rating, None);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let input = parse(json!({
            "title": "Pie",
            "rating": "4.8",
            "prep_time": "15",
            "cook_time": 45,
            "total_time": "60.4"
        }));
        assert_eq!(input.rating, Some(4.8));
        assert_eq!(input.prep_time, Some(15));
        assert_eq!(input.cook_time, Some(45));
        assert_eq!(input.total_time, Some(60));
    }

    #[test]
    fn garbage_numbers_become_none() {
        let input = parse(json!({
            "title": "Pie",
            "rating": true,
            "prep_time": "soon",
            "cook_time": -5,
            "total_time": null
        }));
        assert_eq!(input.rating, None);
        assert_eq!(input.prep_time, None);
        assert_eq!(input.cook_time, None);
        assert_eq!(input.total_time, None);
    }

    #[test]
    fn missing_numeric_fields_are_none() {
        let input = parse(json!({"title": "Pie"}));
        assert_eq!(input.rating, None);
        assert_eq!(input.nutrients, None);
    }

    #[test]
    fn nutrients_keep_text_values() {
        let input = parse(json!({
            "title": "Pie",
            "nutrients": {"calories": "389 kcal", "fatContent": 12, "extra": {"x": 1}}
        }));
        let nutrients = input.nutrients.unwrap();
        assert_eq!(nutrients.get("calories").map(String::as_str), Some("389 kcal"));
        assert_eq!(nutrients.get("fatContent").map(String::as_str), Some("12"));
        assert!(!nutrients.contains_key("extra"));
    }

    #[test]
    fn numeric_text_fields_are_stringified() {
        let input = parse(json!({
            "title": 1984,
            "cuisine": "Thai",
            "serves": 4,
            "description": ["not", "text"]
        }));
        assert_eq!(input.title.as_deref(), Some("1984"));
        assert_eq!(input.cuisine.as_deref(), Some("Thai"));
        assert_eq!(input.serves.as_deref(), Some("4"));
        assert_eq!(input.description, None);

        let recipe = NewRecipe::try_from(input).unwrap();
        assert_eq!(recipe.serves.as_deref(), Some("4"));
    }

    #[test]
    fn non_text_title_counts_as_missing() {
        let err = NewRecipe::try_from(parse(json!({"title": true, "serves": 2}))).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == TITLE_REQUIRED);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = NewRecipe::try_from(parse(json!({"cuisine": "Thai"}))).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == TITLE_REQUIRED);
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = NewRecipe::try_from(parse(json!({"title": ""}))).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(NewRecipe::titled("").ensure_valid().is_err());
    }

    #[test]
    fn clean_number_rejects_non_finite() {
        assert_eq!(clean_number(&json!("NaN")), None);
        assert_eq!(clean_number(&json!("inf")), None);
        assert_eq!(clean_number(&json!("")), None);
        assert_eq!(clean_number(&json!(" 3.5 ")), Some(3.5));
    }
}
