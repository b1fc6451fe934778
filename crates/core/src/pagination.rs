//! Listing pagination: parameter clamping, offsets and page counts.

/// Default number of recipes per listing page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on a client-requested listing page size.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A validated `(page, limit)` pair. Both values are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query-string values.
    ///
    /// Absent, non-numeric, zero or negative values fall back to the
    /// defaults (`page = 1`, `limit = default_limit`). A limit above
    /// `max_limit` is capped.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: i64,
        max_limit: i64,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = clamp_limit(parse_positive(limit), default_limit, max_limit);
        Self { page, limit }
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
}

/// Total number of pages for a listing: `ceil(total / limit)`, never below 1.
pub fn page_count(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 1;
    }
    ((total + limit - 1) / limit).max(1)
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: Option<&str>, limit: Option<&str>) -> PageRequest {
        PageRequest::from_raw(page, limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    #[test]
    fn defaults_when_absent() {
        assert_eq!(request(None, None), PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn defaults_when_non_numeric_or_not_positive() {
        assert_eq!(request(Some("abc"), Some("x")), PageRequest { page: 1, limit: 10 });
        assert_eq!(request(Some("0"), Some("0")), PageRequest { page: 1, limit: 10 });
        assert_eq!(request(Some("-3"), Some("-1")), PageRequest { page: 1, limit: 10 });
        assert_eq!(request(Some("2.5"), None), PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn accepts_valid_values() {
        assert_eq!(request(Some("3"), Some("15")), PageRequest { page: 3, limit: 15 });
    }

    #[test]
    fn caps_limit_at_maximum() {
        assert_eq!(request(None, Some("5000")).limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(request(Some("1"), Some("15")).offset(), 0);
        assert_eq!(request(Some("3"), Some("15")).offset(), 30);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(37, 15), 3);
        assert_eq!(page_count(45, 15), 3);
        assert_eq!(page_count(46, 15), 4);
        assert_eq!(page_count(1, 15), 1);
    }

    #[test]
    fn page_count_never_zero() {
        assert_eq!(page_count(0, 15), 1);
        assert_eq!(page_count(0, 1), 1);
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None, 10, 100), 10);
        assert_eq!(clamp_limit(Some(0), 10, 100), 1);
        assert_eq!(clamp_limit(Some(500), 10, 100), 100);
    }
}
