// ============================================================================
// REPORT VIEWMODEL - fetched rows + search + pagination
// ============================================================================
// Idle -> Loading -> Loaded | Failed. Failed is sticky; only a remount
// (a new view model) starts over.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::ReportError;
use crate::models::ReportRecord;
use crate::services::http::HttpTransport;
use crate::services::report_service::ReportService;
use crate::utils::messages;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// One page of the filtered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportProjection {
    pub rows: Vec<ReportRecord>,
    /// Rows matching the query across all pages.
    pub total_matches: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Filter on client name (case-insensitive substring), then slice one page.
pub fn project(records: &[ReportRecord], query: &str, page: usize, page_size: usize) -> ReportProjection {
    let needle = query.to_lowercase();
    let matches: Vec<&ReportRecord> = records.iter().filter(|r| r.matches(&needle)).collect();
    let total_matches = matches.len();
    let rows = matches
        .into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    ReportProjection {
        rows,
        total_matches,
        page,
        page_size,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportViewModel {
    state: LoadState,
    records: Rc<Vec<ReportRecord>>,
    query: String,
    page: usize,
    page_size: usize,
}

impl ReportViewModel {
    pub fn new() -> Self {
        Self::with_page_size(CONFIG.rows_per_page)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            state: LoadState::Idle,
            records: Rc::new(Vec::new()),
            query: String::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed(_))
    }

    /// Idle -> Loading. Returns `false` when a load already happened.
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::Idle {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<ReportRecord>, ReportError>) {
        if self.state != LoadState::Loading {
            log::warn!("⚠️ Ignoring report result in state {:?}", self.state);
            return;
        }
        match result {
            Ok(records) => {
                self.records = Rc::new(records);
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("❌ Error fetching reports: {}", e);
                self.state = LoadState::Failed(messages::REPORT_FETCH_FAILED.to_string());
            }
        }
    }

    /// Single fetch; no retry.
    pub async fn load<T: HttpTransport>(&mut self, service: &ReportService<T>) {
        if !self.begin_load() {
            return;
        }
        let result = service.fetch_reports().await;
        self.finish_load(result);
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 0;
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn projection(&self) -> ReportProjection {
        project(&self.records, &self.query, self.page, self.page_size)
    }

    pub fn page_count(&self) -> usize {
        self.projection().total_matches.div_ceil(self.page_size)
    }

    /// Footer label, e.g. `11–20 of 42`. A page past the last match shows
    /// an empty range, like its rows.
    pub fn page_label(&self) -> String {
        let total = self.projection().total_matches;
        let start = self.page.saturating_mul(self.page_size);
        if start >= total {
            return format!("0–0 of {}", total);
        }
        let to = start.saturating_add(self.page_size).min(total);
        format!("{}–{} of {}", start + 1, to, total)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page.saturating_add(1) < self.page_count()
    }
}

impl Default for ReportViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::Amount;
    use crate::services::http::fake::FakeTransport;
    use chrono::NaiveDate;
    use serde_json::json;

    fn record(id: i64, client: &str, due: (i32, u32, u32)) -> ReportRecord {
        ReportRecord {
            id,
            client: client.to_string(),
            grand_total: Amount::parse("100").unwrap(),
            paid_amount: Amount::parse("50").unwrap(),
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
        }
    }

    fn many(count: i64) -> Vec<ReportRecord> {
        (1..=count)
            .map(|id| record(id, &format!("Client {}", id), (2024, 1, 1)))
            .collect()
    }

    fn loaded(records: Vec<ReportRecord>, page_size: usize) -> ReportViewModel {
        let mut vm = ReportViewModel::with_page_size(page_size);
        assert!(vm.begin_load());
        vm.finish_load(Ok(records));
        vm
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let records = vec![record(1, "Acme Corp", (2024, 1, 15)), record(2, "Globex", (2024, 1, 15))];

        for query in ["acme", "ACME", "me co", ""] {
            let ids: Vec<i64> = project(&records, query, 0, 10)
                .rows
                .iter()
                .map(|r| r.id)
                .collect();
            if query.is_empty() {
                assert_eq!(ids, vec![1, 2]);
            } else {
                assert_eq!(ids, vec![1], "query {:?}", query);
            }
        }
    }

    #[test]
    fn search_ignores_due_dates() {
        let records = vec![
            record(1, "Acme Corp", (2024, 1, 15)),
            record(2, "Studio 10", (2023, 11, 2)),
        ];

        let projection = project(&records, "0", 0, 10);

        assert_eq!(projection.total_matches, 1);
        assert_eq!(projection.rows[0].client, "Studio 10");
    }

    #[test]
    fn projection_is_idempotent() {
        let vm = loaded(many(25), 10);
        assert_eq!(vm.projection(), vm.projection());
    }

    #[test]
    fn pages_never_exceed_page_size() {
        let mut vm = loaded(many(25), 10);

        for page in 0..5 {
            vm.set_page(page);
            let projection = vm.projection();
            assert!(projection.rows.len() <= 10);
            let expected = match page {
                0 | 1 => 10,
                2 => 5,
                _ => 0,
            };
            assert_eq!(projection.rows.len(), expected, "page {}", page);
        }
    }

    #[test]
    fn huge_page_index_is_empty_not_a_panic() {
        let mut vm = loaded(many(3), 10);
        vm.set_page(usize::MAX);
        assert!(vm.projection().rows.is_empty());
    }

    #[test]
    fn new_query_resets_page() {
        let mut vm = loaded(many(25), 10);
        vm.set_page(2);

        vm.set_query("client 1");

        assert_eq!(vm.page(), 0);
        // Client 1 and Client 10..=19
        assert_eq!(vm.projection().total_matches, 11);

        vm.set_page(1);
        vm.clear_query();
        assert_eq!(vm.page(), 0);
        assert_eq!(vm.query(), "");
    }

    #[test]
    fn page_label_and_navigation() {
        let mut vm = loaded(many(42), 10);
        assert_eq!(vm.page_label(), "1–10 of 42");
        assert_eq!(vm.page_count(), 5);
        assert!(!vm.has_previous_page());
        assert!(vm.has_next_page());

        vm.set_page(4);
        assert_eq!(vm.page_label(), "41–42 of 42");
        assert!(!vm.has_next_page());

        vm.set_query("nobody");
        assert_eq!(vm.page_label(), "0–0 of 0");
        assert_eq!(vm.page_count(), 0);
    }

    #[test]
    fn page_past_the_end_has_an_empty_label() {
        let mut vm = loaded(many(25), 10);
        vm.set_page(10);

        assert!(vm.projection().rows.is_empty());
        assert_eq!(vm.page_label(), "0–0 of 25");
        assert!(!vm.has_next_page());

        vm.set_page(usize::MAX);
        assert_eq!(vm.page_label(), "0–0 of 25");
    }

    #[tokio::test]
    async fn load_happens_once() {
        let transport = FakeTransport::new().respond(
            200,
            json!([{"id": 1, "client": "Acme Corp", "grandtotal": 10, "paidamount": 5, "duedate": "2024-01-15"}]),
        );
        let service = ReportService::new(transport.clone());
        let mut vm = ReportViewModel::with_page_size(10);

        vm.load(&service).await;
        vm.load(&service).await;

        assert_eq!(vm.state(), &LoadState::Loaded);
        assert_eq!(vm.records().len(), 1);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn failure_is_sticky() {
        let transport = FakeTransport::new()
            .fail(TransportError::Network("offline".into()))
            .respond(200, json!([]));
        let service = ReportService::new(transport.clone());
        let mut vm = ReportViewModel::with_page_size(10);

        vm.load(&service).await;
        vm.load(&service).await;

        assert_eq!(vm.state(), &LoadState::Failed("Failed to fetch data".into()));
        assert!(vm.is_failed());
        assert_eq!(transport.requests().len(), 1);
        assert!(vm.projection().rows.is_empty());
    }

    #[test]
    fn late_results_are_ignored_outside_loading() {
        let mut vm = ReportViewModel::with_page_size(10);
        vm.finish_load(Ok(many(3)));
        assert_eq!(vm.state(), &LoadState::Idle);
        assert!(vm.records().is_empty());
    }
}
