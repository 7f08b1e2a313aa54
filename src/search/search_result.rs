use std::sync::Arc;

use crate::error::InvalidSearchResult;
use crate::search::search_handler::SearchHandler;

/// One page of records returned for a query.
///
/// Page numbers start at 0 and are derived from the offset and the number of records, so it is
///  assumed that all pages of a query have the same size with the exception of the last one.
#[derive(Clone, Debug)]
pub struct SearchResult<T> {
    query: String,
    search_handler: Arc<dyn SearchHandler>,
    total_available_records: u64,
    offset: u64,
    records: Vec<T>,
}
impl<T> SearchResult<T> {
    pub fn new(
        query: impl Into<String>,
        search_handler: Arc<dyn SearchHandler>,
        total_available_records: i64,
        offset: i64,
        records: Vec<T>,
    ) -> Result<SearchResult<T>, InvalidSearchResult> {
        if total_available_records < 0 {
            return Err(InvalidSearchResult::NegativeTotal(total_available_records));
        }
        if offset < 0 {
            return Err(InvalidSearchResult::NegativeOffset(offset));
        }
        if offset > total_available_records {
            return Err(InvalidSearchResult::OffsetOutOfRange { offset, total: total_available_records });
        }

        Ok(SearchResult {
            query: query.into(),
            search_handler,
            total_available_records: total_available_records as u64,
            offset: offset as u64,
            records,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_handler(&self) -> &Arc<dyn SearchHandler> {
        &self.search_handler
    }

    pub fn total_available_records(&self) -> u64 {
        self.total_available_records
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// The offset of the page following this one
    pub fn next_offset(&self) -> u64 {
        self.offset + self.records.len() as u64
    }

    pub fn page(&self) -> u64 {
        // an empty page has no page size to derive a page number from
        if self.offset == 0 || self.records.is_empty() {
            return 0;
        }

        let records_per_page = self.records.len() as u64;
        (self.offset + records_per_page - 1) / records_per_page
    }

    pub fn has_previous_page(&self) -> bool {
        self.page() != 0
    }

    pub fn has_next_page(&self) -> bool {
        // NB: the divisor is 'records + 1', not the page size used by page(). Navigation in the
        //  result views relies on exactly this behavior.
        let total_pages = (self.total_available_records as i64 - 1) / (self.records.len() as i64 + 1);
        (self.page() as i64) < total_pages
    }

    pub fn summary(&self) -> String {
        if self.total_available_records > self.records.len() as u64 {
            format!("Showing {}-{} of {} results", self.offset + 1, self.next_offset(), self.total_available_records)
        }
        else {
            format!("Showing all {} results", self.total_available_records)
        }
    }

    pub fn presentable_group_id(&self, group_id: &str) -> String {
        self.search_handler.presentable_group_id(&self.query, group_id)
    }

    pub fn presentable_artifact_id(&self, artifact_id: &str) -> String {
        self.search_handler.presentable_artifact_id(&self.query, artifact_id)
    }

    pub fn presentable_version(&self, version: &str, is_latest_version: bool) -> String {
        self.search_handler.presentable_version(&self.query, version, is_latest_version)
    }
}
