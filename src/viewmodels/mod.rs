pub mod auth_viewmodel;
pub mod report_viewmodel;
pub mod route_guard;
pub mod validation;

pub use auth_viewmodel::{AfterSuccess, AuthViewModel, FormKind};
pub use report_viewmodel::{project, LoadState, ReportProjection, ReportViewModel};
pub use route_guard::{admit, Admission};

#[cfg(target_arch = "wasm32")]
pub use auth_viewmodel::BrowserAuthViewModel;
