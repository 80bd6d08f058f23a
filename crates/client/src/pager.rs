//! Page-scoped list state.
//!
//! One `ListPager` backs one table for the lifetime of its page: current
//! items, pagination meta, search text, and the staleness guard for its
//! in-flight loads. Dropping the pager drops the page's data; nothing
//! survives navigation.

use crate::pagination::{ListQuery, PageMeta, Paginated};
use crate::seq::{RequestSeq, SeqTicket};

#[derive(Debug)]
pub struct ListPager<T> {
    items: Vec<T>,
    meta: PageMeta,
    query: ListQuery,
    seq: RequestSeq,
    needs_refresh: bool,
}

impl<T> ListPager<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            query: ListQuery::new().with_limit(limit),
            seq: RequestSeq::new(),
            needs_refresh: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access for optimistic single-record patches.
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Call before issuing a load; the returned ticket must accompany the
    /// response into [`apply`](Self::apply).
    pub fn begin_load(&self) -> SeqTicket {
        self.seq.issue()
    }

    /// Apply a loaded page. Returns `false` (and changes nothing) when a
    /// newer load was issued since the ticket, so a late response never
    /// overwrites newer state.
    pub fn apply(&mut self, ticket: SeqTicket, page: Paginated<T>) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!("discarding stale list response");
            return false;
        }
        self.items = page.data;
        self.meta = page.meta;
        self.needs_refresh = false;
        true
    }

    /// New search resets to the first page.
    pub fn set_search(&mut self, search: Option<String>) {
        self.query.search = search.filter(|s| !s.trim().is_empty());
        self.query.page = 1;
    }

    /// Move to `page` if it is within `1..=last_page`.
    pub fn goto_page(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.meta.last_page {
            self.query.page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.goto_page(self.query.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.query.page > 1 && self.goto_page(self.query.page - 1)
    }

    /// Reconciliation hook for optimistic updates: the cached copy is known
    /// to be partially stale and should be re-fetched at the next natural
    /// boundary.
    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(values: Vec<i64>, last_page: u32) -> Paginated<i64> {
        Paginated {
            data: values,
            meta: PageMeta {
                total: 31,
                from: Some(1),
                to: Some(15),
                last_page,
            },
        }
    }

    #[test]
    fn applies_the_latest_response() {
        let mut pager: ListPager<i64> = ListPager::new(15);
        let ticket = pager.begin_load();
        assert!(pager.apply(ticket, page_of(vec![1, 2], 3)));
        assert_eq!(pager.items(), &[1, 2]);
        assert_eq!(pager.meta().last_page, 3);
    }

    #[test]
    fn discards_a_superseded_response() {
        let mut pager: ListPager<i64> = ListPager::new(15);
        let stale = pager.begin_load();
        let fresh = pager.begin_load();

        // The fresh response lands first; the stale one must not clobber it.
        assert!(pager.apply(fresh, page_of(vec![3, 4], 2)));
        assert!(!pager.apply(stale, page_of(vec![1, 2], 9)));
        assert_eq!(pager.items(), &[3, 4]);
        assert_eq!(pager.meta().last_page, 2);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut pager: ListPager<i64> = ListPager::new(15);
        let ticket = pager.begin_load();
        pager.apply(ticket, page_of(vec![1], 3));

        assert!(!pager.prev_page());
        assert!(pager.next_page());
        assert_eq!(pager.query().page, 2);
        assert!(pager.goto_page(3));
        assert!(!pager.next_page());
        assert_eq!(pager.query().page, 3);
    }

    #[test]
    fn search_resets_to_the_first_page() {
        let mut pager: ListPager<i64> = ListPager::new(15);
        let ticket = pager.begin_load();
        pager.apply(ticket, page_of(vec![1], 3));
        pager.goto_page(2);

        pager.set_search(Some("budi".to_owned()));
        assert_eq!(pager.query().page, 1);
        assert_eq!(pager.query().search.as_deref(), Some("budi"));

        // Blank searches clear the filter instead of sending empty text.
        pager.set_search(Some("   ".to_owned()));
        assert_eq!(pager.query().search, None);
    }

    #[test]
    fn refresh_flag_survives_until_the_next_applied_load() {
        let mut pager: ListPager<i64> = ListPager::new(15);
        pager.mark_needs_refresh();
        assert!(pager.needs_refresh());

        let ticket = pager.begin_load();
        pager.apply(ticket, page_of(vec![1], 1));
        assert!(!pager.needs_refresh());
    }
}
