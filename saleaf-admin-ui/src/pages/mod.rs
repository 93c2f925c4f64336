//! Pages
//!
//! Top-level page components for each route.

use std::future::Future;

use leptos::*;

use saleaf_admin::auth::Session;
use saleaf_admin::error::AdminResult;
use saleaf_admin::listing::{PageRequest, ServerPaginatedList};
use saleaf_admin::pagination::Page;

pub mod bursary_applications;
pub mod code_verification;
pub mod customers;
pub mod dashboard;
pub mod event_registrations;
pub mod forgot_password;
pub mod login;
pub mod student_marks;

pub use bursary_applications::BursaryApplications;
pub use code_verification::CodeVerification;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use event_registrations::EventRegistrations;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use student_marks::StudentMarks;

/// Send a page request and apply its response to `list`.
///
/// `None` means the parameter change issued no request. Responses to
/// superseded requests are dropped by the list itself.
pub(crate) fn spawn_page_request<T, F, Fut>(
    list: RwSignal<ServerPaginatedList<T>>,
    session: Session,
    request: Option<PageRequest>,
    fetch: F,
) where
    T: 'static,
    F: FnOnce(Session, PageRequest) -> Fut + 'static,
    Fut: Future<Output = AdminResult<Page<T>>> + 'static,
{
    let Some(request) = request else {
        return;
    };

    spawn_local(async move {
        let seq = request.seq;
        let result = fetch(session, request).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Page request {} failed: {}", seq, e).into());
        }
        list.update(|list| {
            list.apply(seq, result);
        });
    });
}
