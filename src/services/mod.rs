pub mod auth_service;
pub mod http;
pub mod report_service;

pub use auth_service::AuthGateway;
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use report_service::ReportService;

#[cfg(target_arch = "wasm32")]
pub use http::FetchTransport;
