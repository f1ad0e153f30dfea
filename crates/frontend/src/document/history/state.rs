use contracts::dates::is_iso_date_shape;
use contracts::document::{ApiError, Document, ListResult};
use contracts::filters::{ListFilters, SortBy, SortOrder};

/// State of the document history view: the query parameters, the last page
/// of results, and the in-flight bookkeeping.
///
/// All transitions are plain methods so the widget stays a thin shell around
/// this struct. Two invariants are enforced here rather than in the view:
///
/// - any change to name, date, sort or page size resets `page` to 1 in the
///   same update, so a narrowed filter can never point at an out-of-range
///   page;
/// - results are applied through a sequence guard, so a slow response that
///   resolves after a newer one is discarded instead of clobbering fresher
///   state.
#[derive(Clone, Debug)]
pub struct HistoryState {
    pub filters: ListFilters,

    pub items: Vec<Document>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,

    pub loading: bool,
    pub error: Option<String>,

    // sequence of the most recently dispatched fetch
    dispatched_seq: u64,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            filters: ListFilters::default(),
            items: Vec::new(),
            total: 0,
            page: 1,
            pages: 1,
            loading: true,
            error: None,
            dispatched_seq: 0,
        }
    }
}

impl HistoryState {
    pub fn set_name_filter(&mut self, name: String) {
        self.filters.name = name;
        self.filters.page = 1;
    }

    /// Accept a date filter value. Input that is neither empty nor a full
    /// `YYYY-MM-DD` date is ignored, not stored, so partial input from the
    /// picker never reaches the query parameters. Returns whether the value
    /// was accepted.
    pub fn set_date_filter(&mut self, date: String) -> bool {
        if !date.is_empty() && !is_iso_date_shape(&date) {
            return false;
        }
        self.filters.date = date;
        self.filters.page = 1;
        true
    }

    /// Column header click: a new column sorts ascending, a repeated click
    /// flips the order.
    pub fn toggle_sort(&mut self, column: SortBy) {
        if self.filters.sort_by == Some(column) {
            self.filters.sort_order = Some(
                self.filters
                    .sort_order
                    .unwrap_or(SortOrder::Asc)
                    .flipped(),
            );
        } else {
            self.filters.sort_by = Some(column);
            self.filters.sort_order = Some(SortOrder::Asc);
        }
        self.filters.page = 1;
    }

    /// Pagination only; the one filter change that keeps the current page.
    pub fn set_page(&mut self, page: u32) {
        self.filters.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.filters.limit = limit.max(1);
        self.filters.page = 1;
    }

    /// Mark a fetch as dispatched and return its sequence number.
    /// The caller passes the number back to [`apply_outcome`].
    ///
    /// [`apply_outcome`]: HistoryState::apply_outcome
    pub fn begin_fetch(&mut self) -> u64 {
        self.dispatched_seq += 1;
        self.loading = true;
        self.error = None;
        self.dispatched_seq
    }

    /// Apply a fetch outcome if it is still the latest dispatched request.
    ///
    /// A stale outcome (an older sequence number) is discarded and `false`
    /// is returned; discards are not errors and must not be surfaced. On a
    /// failed fetch the previous items stay visible and only the error
    /// message changes.
    pub fn apply_outcome(&mut self, seq: u64, outcome: Result<ListResult, ApiError>) -> bool {
        if seq != self.dispatched_seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.items = result.items;
                self.total = result.total;
                self.page = result.page.max(1);
                self.pages = result.pages.max(1);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.message);
            }
        }
        true
    }

    /// Replace a document in the current page in place, used after
    /// save-to-drive returns the updated row.
    pub fn update_document(&mut self, document: Document) {
        if let Some(slot) = self.items.iter_mut().find(|d| d.id == document.id) {
            *slot = document;
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::document::TemplateType;

    fn document(id: i64, name: &str) -> Document {
        Document {
            id,
            name: name.to_string(),
            date: "2024-03-05".to_string(),
            amount: 100.0,
            template_type: TemplateType::Receipt,
            content: String::new(),
            doc_url: None,
            doc_id: None,
            google_doc_id: None,
            created_at: String::new(),
            updated_at: None,
        }
    }

    fn page_of(ids: &[i64]) -> ListResult {
        ListResult {
            items: ids.iter().map(|&id| document(id, "doc")).collect(),
            total: ids.len() as u64,
            page: 1,
            pages: 1,
        }
    }

    #[test]
    fn test_name_filter_resets_page() {
        let mut state = HistoryState::default();
        state.set_page(3);
        state.set_name_filter("acme".to_string());
        assert_eq!(state.filters.page, 1);
        assert_eq!(state.filters.name, "acme");
    }

    #[test]
    fn test_date_filter_resets_page_and_rejects_partial_input() {
        let mut state = HistoryState::default();
        state.set_page(3);

        assert!(!state.set_date_filter("2024-1".to_string()));
        assert_eq!(state.filters.date, "");
        assert_eq!(state.filters.page, 3, "rejected input must not touch state");

        assert!(state.set_date_filter("2024-03-05".to_string()));
        assert_eq!(state.filters.date, "2024-03-05");
        assert_eq!(state.filters.page, 1);

        state.set_page(2);
        assert!(state.set_date_filter(String::new()));
        assert_eq!(state.filters.page, 1);
    }

    #[test]
    fn test_sort_toggle_resets_page() {
        let mut state = HistoryState::default();
        state.set_page(3);
        state.toggle_sort(SortBy::Name);
        assert_eq!(state.filters.page, 1);
    }

    #[test]
    fn test_sort_toggle_new_column_sorts_ascending() {
        let mut state = HistoryState::default();
        // default sort is date desc
        state.toggle_sort(SortBy::Name);
        assert_eq!(state.filters.sort_by, Some(SortBy::Name));
        assert_eq!(state.filters.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_sort_toggle_same_column_flips_order() {
        let mut state = HistoryState::default();
        state.filters.sort_by = Some(SortBy::Date);
        state.filters.sort_order = Some(SortOrder::Asc);

        state.toggle_sort(SortBy::Date);
        assert_eq!(state.filters.sort_order, Some(SortOrder::Desc));

        state.toggle_sort(SortBy::Date);
        assert_eq!(state.filters.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_page_change_keeps_other_filters() {
        let mut state = HistoryState::default();
        state.set_name_filter("acme".to_string());
        state.set_page(4);
        assert_eq!(state.filters.page, 4);
        assert_eq!(state.filters.name, "acme");
    }

    #[test]
    fn test_limit_change_resets_page() {
        let mut state = HistoryState::default();
        state.set_page(5);
        state.set_limit(50);
        assert_eq!(state.filters.limit, 50);
        assert_eq!(state.filters.page, 1);
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut state = HistoryState::default();
        state.loading = false;
        state.error = Some("old".to_string());
        let seq = state.begin_fetch();
        assert_eq!(seq, 1);
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = HistoryState::default();
        let seq_a = state.begin_fetch();
        let seq_b = state.begin_fetch();

        // B resolves first and wins
        assert!(state.apply_outcome(seq_b, Ok(page_of(&[2]))));
        assert_eq!(state.items[0].id, 2);
        assert!(!state.loading);

        // A resolves late and must not overwrite fresher state
        assert!(!state.apply_outcome(seq_a, Ok(page_of(&[1]))));
        assert_eq!(state.items[0].id, 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_error_is_discarded_too() {
        let mut state = HistoryState::default();
        let seq_a = state.begin_fetch();
        let seq_b = state.begin_fetch();

        assert!(state.apply_outcome(seq_b, Ok(page_of(&[2]))));
        assert!(!state.apply_outcome(seq_a, Err(ApiError::new("network down"))));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_fetch_preserves_items() {
        let mut state = HistoryState::default();
        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Ok(page_of(&[1, 2]))));

        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Err(ApiError::new("Failed to fetch documents"))));
        assert_eq!(state.items.len(), 2, "previous items stay visible");
        assert_eq!(state.error.as_deref(), Some("Failed to fetch documents"));
        assert!(!state.loading);
    }

    // The widget notifies off the stored error after an applied outcome, so
    // the error field must be set iff the applied fetch failed.
    #[test]
    fn test_applied_failure_exposes_message_for_notification() {
        let mut state = HistoryState::default();
        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Err(ApiError::new("Name already exists"))));
        assert_eq!(state.error.as_deref(), Some("Name already exists"));

        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Ok(page_of(&[1]))));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_successful_fetch_replaces_result_fields() {
        let mut state = HistoryState::default();
        let seq = state.begin_fetch();
        let result = ListResult {
            items: vec![document(1, "a")],
            total: 41,
            page: 3,
            pages: 5,
        };
        assert!(state.apply_outcome(seq, Ok(result)));
        assert_eq!(state.total, 41);
        assert_eq!(state.page, 3);
        assert_eq!(state.pages, 5);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_result_is_distinct_state() {
        let mut state = HistoryState::default();
        let seq = state.begin_fetch();
        assert!(state.apply_outcome(
            seq,
            Ok(ListResult {
                items: vec![],
                total: 0,
                page: 1,
                pages: 1,
            })
        ));
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_document_replaces_row_by_id() {
        let mut state = HistoryState::default();
        let seq = state.begin_fetch();
        assert!(state.apply_outcome(seq, Ok(page_of(&[1, 2]))));

        let mut updated = document(2, "doc");
        updated.google_doc_id = Some("g-123".to_string());
        state.update_document(updated);
        assert_eq!(
            state.items[1].google_doc_id.as_deref(),
            Some("g-123")
        );
        assert!(state.items[0].google_doc_id.is_none());
    }
}
