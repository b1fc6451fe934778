//! Operator-tagged numeric range expressions (`gte:4.5`, `lte:30`, `eq:4`).
//!
//! Parsing is lenient: anything that is not a well-formed
//! expression yields `None` and the caller simply skips the filter. A bad
//! range token must never fail the request it arrived with.

use std::fmt;

/// Comparison operator accepted in a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Gte,
    Lte,
    Eq,
}

impl RangeOp {
    /// Parse the operator tag. Tags are lowercase and matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gte" => Some(Self::Gte),
            "lte" => Some(Self::Lte),
            "eq" => Some(Self::Eq),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Gte => "gte",
            Self::Lte => "lte",
            Self::Eq => "eq",
        }
    }

    /// SQL comparison operator for this tag.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Eq => "=",
        }
    }
}

/// A parsed `(operator, threshold)` pair, not yet bound to a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeExpr {
    pub op: RangeOp,
    pub threshold: f64,
}

impl RangeExpr {
    /// Evaluate the expression against a stored value.
    ///
    /// `eq` is exact floating-point equality: `4.5` only matches a stored
    /// `4.5`, never `4.4999999`.
    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            RangeOp::Gte => value >= self.threshold,
            RangeOp::Lte => value <= self.threshold,
            RangeOp::Eq => value == self.threshold,
        }
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.op.as_tag(), self.threshold)
    }
}

/// Parse a `"<op>:<number>"` token.
///
/// Returns `None` for a missing colon, an unknown operator, or a remainder
/// that is not a finite floating-point literal (`NaN` and infinities are
/// rejected).
///
/// # Examples
///
/// ```
/// use catalog_core::range::{parse_range, RangeOp};
/// let expr = parse_range("gte:4.5").unwrap();
/// assert_eq!(expr.op, RangeOp::Gte);
/// assert_eq!(expr.threshold, 4.5);
/// assert!(parse_range("between:1").is_none());
/// ```
pub fn parse_range(token: &str) -> Option<RangeExpr> {
    let (tag, number) = token.split_once(':')?;
    let op = RangeOp::from_tag(tag)?;
    let threshold = number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())?;
    Some(RangeExpr { op, threshold })
}
