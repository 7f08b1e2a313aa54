use std::collections::BTreeMap;

use crate::search::search_result::SearchResult;

/// Where to get the page after the current one from
#[derive(Debug)]
pub enum NextPage<'a, T> {
    Cached(&'a SearchResult<T>),
    /// not loaded yet - query again, starting at this offset
    Load { offset: u64 },
    None,
}

/// The pages of a single query that were loaded so far, keyed by offset.
///
/// Going back never requires a new search; going forward only does if the next page was not
///  loaded before. Inserting a page of a different query discards all cached pages.
#[derive(Debug)]
pub struct ResultPages<T> {
    query: Option<String>,
    pages: BTreeMap<u64, SearchResult<T>>,
}
impl<T> ResultPages<T> {
    pub fn new() -> ResultPages<T> {
        ResultPages {
            query: None,
            pages: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, result: SearchResult<T>) {
        if self.query.as_deref() != Some(result.query()) {
            self.pages.clear();
            self.query = Some(result.query().to_string());
        }

        self.pages.insert(result.offset(), result);
    }

    /// The cached page starting at `offset`
    pub fn get(&self, offset: u64) -> Option<&SearchResult<T>> {
        self.pages.get(&offset)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.query = None;
        self.pages.clear();
    }

    pub fn previous(&self, current: &SearchResult<T>) -> Option<&SearchResult<T>> {
        if !current.has_previous_page() {
            return None;
        }
        self.pages.range(..current.offset())
            .next_back()
            .map(|(_, page)| page)
    }

    pub fn next(&self, current: &SearchResult<T>) -> NextPage<'_, T> {
        if !current.has_next_page() {
            return NextPage::None;
        }

        match self.pages.get(&current.next_offset()) {
            Some(cached) => NextPage::Cached(cached),
            None => NextPage::Load { offset: current.next_offset() },
        }
    }
}

impl<T> Default for ResultPages<T> {
    fn default() -> Self {
        ResultPages::new()
    }
}
