//! # Query and Path Parameter Parsing
//!
//! Lenient coercion for list pagination and path ids, matching the wire
//! contract: `page` and `limit` fall back to their defaults on garbage input
//! and are clamped to at least 1; a non-numeric id simply never matches a
//! record.

/// Default page when the parameter is absent or invalid
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the parameter is absent or invalid
pub const DEFAULT_LIMIT: usize = 10;

/// Resolved pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: usize,
    /// Records per page
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Coerce raw query values into a pagination window
    ///
    /// Absent or non-numeric values fall back to the defaults; anything
    /// below 1 is clamped up to 1.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce(page, DEFAULT_PAGE),
            limit: coerce(limit, DEFAULT_LIMIT),
        }
    }

    /// Slice a filtered list down to this page
    ///
    /// Pagination happens after filtering, so `total` reported to the client
    /// is the filtered length, not the page length.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let start = (self.page - 1).saturating_mul(self.limit);
        items.into_iter().skip(start).take(self.limit).collect()
    }
}

fn coerce(raw: Option<&str>, default: usize) -> usize {
    match raw {
        Some(value) => value.parse::<i64>().map(|n| n.max(1) as usize).unwrap_or(default),
        None => default,
    }
}

/// Parse a path id; values that are not valid numbers match no record
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Treat empty strings as absent, for presence checks and patches
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
