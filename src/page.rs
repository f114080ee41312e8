//! Pagination cursor: how many items of an ordered list are currently
//! exposed. Grows on demand, resets when the caller re-filters.

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The cursor is single-writer state scoped to one list view; callers that
/// share it across writers must serialize `advance`/`reset` themselves
/// (e.g. behind a mutex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    exposed: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        PaginationCursor::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationCursor {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        PaginationCursor {
            page_size,
            exposed: page_size,
        }
    }

    /// Current exposed count. May exceed the backing list length.
    pub fn exposed(&self) -> usize {
        self.exposed
    }

    /// Expose one more page. No upper clamp: `visible` stays safe regardless.
    pub fn advance(&mut self) {
        self.exposed += self.page_size;
    }

    /// Back to the first page. Callers invoke this whenever the query, facet
    /// selection, or underlying collection changes.
    pub fn reset(&mut self) {
        self.exposed = self.page_size;
    }

    /// The currently exposed prefix of a list. Always a valid slice, even
    /// when the cursor has advanced past the end.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.exposed.min(items.len())]
    }

    /// True once every item of a list of the given length is exposed.
    pub fn is_exhausted(&self, len: usize) -> bool {
        self.exposed >= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_over_thirty_items() {
        let items: Vec<u32> = (0..30).collect();
        let mut cursor = PaginationCursor::default();
        assert_eq!(cursor.visible(&items).len(), 12);
        cursor.advance();
        assert_eq!(cursor.exposed(), 24);
        assert_eq!(cursor.visible(&items).len(), 24);
        cursor.advance();
        assert_eq!(cursor.exposed(), 36);
        // Past the end: full list, no panic.
        assert_eq!(cursor.visible(&items).len(), 30);
        assert!(cursor.is_exhausted(items.len()));
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut cursor = PaginationCursor::new(5);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.exposed(), 15);
        cursor.reset();
        assert_eq!(cursor.exposed(), 5);
    }

    #[test]
    fn test_visible_prefix_order() {
        let items = vec!["a", "b", "c", "d"];
        let cursor = PaginationCursor::new(2);
        assert_eq!(cursor.visible(&items), &["a", "b"]);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = vec![];
        let cursor = PaginationCursor::default();
        assert!(cursor.visible(&items).is_empty());
        assert!(cursor.is_exhausted(0));
    }

    #[test]
    fn test_zero_page_size_clamps_to_one() {
        let cursor = PaginationCursor::new(0);
        assert_eq!(cursor.exposed(), 1);
    }
}
