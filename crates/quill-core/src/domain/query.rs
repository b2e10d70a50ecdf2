//! Listing parameters after clamping and defaulting.

/// Default page size when the caller sends none (or garbage).
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound on page size to prevent abuse.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A normalized listing query: pagination plus an optional author filter.
///
/// Construction always succeeds; out-of-range input is clamped, never
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u64,
    pub page_size: u64,
    /// Case-insensitive substring match against `author`. `None` means no
    /// filtering; empty or whitespace-only input is treated as `None`.
    pub author: Option<String>,
}

impl PostQuery {
    /// Clamp raw request parameters into a valid query.
    pub fn normalize(page: Option<i64>, page_size: Option<i64>, author: Option<&str>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => 1,
        };

        let page_size = match page_size {
            Some(s) if s >= 1 => (s as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_owned);

        Self {
            page,
            page_size,
            author,
        }
    }

    /// Number of records to skip before the requested page. Saturates
    /// instead of overflowing, so an absurdly large page is simply an
    /// empty page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Total pages for a given record count, never less than zero.
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size)
    }
}

impl Default for PostQuery {
    fn default() -> Self {
        Self::normalize(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_clamped_to_minimum_one() {
        for raw in [None, Some(0), Some(-5), Some(i64::MIN)] {
            assert_eq!(PostQuery::normalize(raw, None, None).page, 1);
        }
        assert_eq!(PostQuery::normalize(Some(7), None, None).page, 7);
    }

    #[test]
    fn page_size_is_clamped_to_range() {
        assert_eq!(
            PostQuery::normalize(None, None, None).page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(
            PostQuery::normalize(None, Some(0), None).page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(
            PostQuery::normalize(None, Some(-3), None).page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(PostQuery::normalize(None, Some(1), None).page_size, 1);
        assert_eq!(
            PostQuery::normalize(None, Some(1000), None).page_size,
            MAX_PAGE_SIZE
        );
    }

    #[test]
    fn blank_author_means_no_filter() {
        assert_eq!(PostQuery::normalize(None, None, Some("")).author, None);
        assert_eq!(PostQuery::normalize(None, None, Some("   ")).author, None);
        assert_eq!(
            PostQuery::normalize(None, None, Some("  john ")).author,
            Some("john".to_owned())
        );
    }

    #[test]
    fn offset_skips_previous_pages() {
        let q = PostQuery::normalize(Some(3), Some(10), None);
        assert_eq!(q.offset(), 20);
        assert_eq!(PostQuery::default().offset(), 0);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let q = PostQuery::normalize(Some(i64::MAX), Some(100), None);
        assert_eq!(q.offset(), u64::MAX);

        let q = PostQuery::normalize(Some(i64::MAX), Some(1), None);
        assert_eq!(q.offset(), i64::MAX as u64 - 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let q = PostQuery::normalize(Some(1), Some(10), None);
        assert_eq!(q.total_pages(0), 0);
        assert_eq!(q.total_pages(10), 1);
        assert_eq!(q.total_pages(11), 2);
    }
}
