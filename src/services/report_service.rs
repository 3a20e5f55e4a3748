use crate::error::ReportError;
use crate::models::ReportRecord;
use crate::services::http::{HttpRequest, HttpTransport};
use crate::utils::constants::REPORTS_PATH;

/// Read-only access to the billing report.
#[derive(Clone)]
pub struct ReportService<T> {
    transport: T,
}

impl<T: HttpTransport> ReportService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn fetch_reports(&self) -> Result<Vec<ReportRecord>, ReportError> {
        log::info!("📋 Fetching reports...");
        let response = self.transport.send(HttpRequest::get(REPORTS_PATH)).await?;

        if !response.is_success() {
            return Err(ReportError::Status(response.status));
        }

        let records = response
            .json::<Vec<ReportRecord>>()
            .map_err(|e| ReportError::Parse(e.to_string()))?;
        log::info!("✅ {} report rows", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::services::http::fake::FakeTransport;
    use crate::services::http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn fetches_and_parses_rows() {
        let transport = FakeTransport::new().respond(
            200,
            json!([
                {"id": 1, "client": "Acme Corp", "grandtotal": "100.00", "paidamount": "40.00", "duedate": "2024-01-15"}
            ]),
        );
        let service = ReportService::new(transport.clone());

        let records = service.fetch_reports().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].client, "Acme Corp");
        assert_eq!(transport.requests()[0].method, Method::Get);
        assert_eq!(transport.requests()[0].path, "/api/reports");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let service = ReportService::new(FakeTransport::new().respond(503, json!({})));
        assert_eq!(service.fetch_reports().await, Err(ReportError::Status(503)));
    }

    #[tokio::test]
    async fn malformed_rows_are_a_parse_error() {
        let service = ReportService::new(
            FakeTransport::new().respond(200, json!([{"id": 1, "client": "Acme"}])),
        );
        assert!(matches!(service.fetch_reports().await, Err(ReportError::Parse(_))));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let service = ReportService::new(
            FakeTransport::new().fail(TransportError::Network("offline".into())),
        );
        assert!(matches!(
            service.fetch_reports().await,
            Err(ReportError::Transport(TransportError::Network(_)))
        ));
    }
}
