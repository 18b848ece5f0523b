//! # Paginator
//!
//! Pages are 1-based fixed-size slices of the filtered collection.
//!
//! ```text
//!   filtered: [r0 r1 r2 r3 r4 r5 | r6 r7 r8 r9]     size = 6
//!              └──── page 1 ────┘ └─ page 2 ─┘      total_pages = 2
//!
//!   page strip (current = 6, total = 12):
//!     1  …  4  5  [6]  7  8  …  12
//! ```
//!
//! Nothing here owns page state; the session keeps the current number and
//! uses [`clamp_page`] whenever the filtered count changes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How many page numbers the strip shows around the current page.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, R> {
    pub items: &'a [R],
    pub number: usize,
    pub total_pages: usize,
}

/// `max(1, ceil(len / size))`. A zero size is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slices `[(n-1)*size, n*size)` clipped to the record count.
///
/// `page` is used as given; an out-of-range page yields an empty slice.
pub fn paginate<R>(records: &[R], page: usize, page_size: usize) -> PageSlice<'_, R> {
    let size = page_size.max(1);
    let total = total_pages(records.len(), size);
    let start = page.saturating_sub(1).saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());

    PageSlice {
        items: &records[start..end],
        number: page,
        total_pages: total,
    }
}

/// True when there is more than one page worth of records.
pub fn needs_pagination(filtered_count: usize, page_size: usize) -> bool {
    filtered_count > page_size.max(1)
}

/// Page to show after removing records from the current page.
///
/// Steps back one page when the current page is about to become empty and
/// is not the first page.
pub fn page_after_removal(current: usize, items_on_page: usize, removed: usize) -> usize {
    if current > 1 && removed >= items_on_page {
        current - 1
    } else {
        current
    }
}

// =============================================================================
// Page Window
// =============================================================================

/// One entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "page", rename_all = "camelCase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Builds the page-number strip: first and last page always, up to
/// [`MAX_VISIBLE_PAGES`] numbers around `current`, ellipses where pages are
/// skipped.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    let total = total.max(1) as i64;
    let current = (current as i64).clamp(1, total);
    let half = (MAX_VISIBLE_PAGES / 2) as i64;

    let mut links = vec![PageLink::Page(1)];

    if current - half > 2 {
        links.push(PageLink::Ellipsis);
    }

    let mut start = (current - half).max(2);
    let mut end = (current + half).min(total - 1);
    if current <= half {
        end = (MAX_VISIBLE_PAGES as i64 - 1).min(total - 1);
    } else if current >= total - half {
        start = (total - MAX_VISIBLE_PAGES as i64 + 2).max(2);
    }

    for page in start..=end {
        if page > 1 && page < total {
            links.push(PageLink::Page(page as usize));
        }
    }

    if current + half < total - 1 {
        links.push(PageLink::Ellipsis);
    }

    if total > 1 {
        links.push(PageLink::Page(total as usize));
    }

    links
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(10, 0), 10);
    }

    #[test]
    fn test_second_page_of_ten() {
        let records: Vec<usize> = (0..10).collect();
        let page = paginate(&records, 2, 6);
        assert_eq!(page.items, &[6, 7, 8, 9]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number, 2);
    }

    #[test]
    fn test_pages_cover_every_record_once() {
        let records: Vec<usize> = (0..23).collect();
        let size = 7;
        let total = total_pages(records.len(), size);
        let mut seen = Vec::new();
        for n in 1..=total {
            let page = paginate(&records, n, size);
            assert!(page.items.len() <= size);
            seen.extend_from_slice(page.items);
        }
        assert_eq!(seen, records);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records: Vec<usize> = (0..3).collect();
        assert!(paginate(&records, 5, 6).items.is_empty());
        assert_eq!(paginate(&records, 0, 6).items, &[0, 1, 2]);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_needs_pagination() {
        assert!(!needs_pagination(6, 6));
        assert!(needs_pagination(7, 6));
    }

    #[test]
    fn test_page_after_removal() {
        assert_eq!(page_after_removal(3, 1, 1), 2);
        assert_eq!(page_after_removal(1, 1, 1), 1);
        assert_eq!(page_after_removal(3, 4, 1), 3);
    }

    #[test]
    fn test_window_small_totals() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(1, 12),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(6, 12),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(12, 12),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Page(12)]
        );
    }
}
