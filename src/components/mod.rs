use yew::prelude::*;

use crate::routes::Route;

pub mod app;
pub mod forgot_password_page;
pub mod form;
pub mod home_page;
pub mod link;
pub mod login_page;
pub mod register_page;
pub mod report_page;

pub use app::App;
pub use forgot_password_page::ForgotPasswordPage;
pub use home_page::HomePage;
pub use link::Link;
pub use login_page::LoginPage;
pub use register_page::RegisterPage;
pub use report_page::ReportPage;

/// Every page navigates through the router that rendered it.
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub on_navigate: Callback<Route>,
}
