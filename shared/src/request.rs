//! Request types for the shared crate

/// Pagination query parameters for payment history (`?page=&limit=`)
///
/// Both values arrive as raw strings so that malformed input degrades to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationQuery {
    /// 1-based page; unset, non-numeric or < 1 yields 1
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Page size; `None` (unset, non-numeric or ≤ 0) means "no pagination"
    pub fn limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|l| *l > 0)
    }
}

/// Parse the leading decimal integer of a string (`"3"`, `" 3 "`, `"3abc"` → 3)
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
