//! API routes and query strings
//!
//! Paths are relative to the configured base URL. Parameter names differ
//! per endpoint and are kept exactly as the API expects them.

use crate::listing::PageRequest;

pub const DASHBOARD: &str = "/api/DashBoard";
pub const CUSTOMER_LIST: &str = "/api/customer/list";
pub const BURSARY_APPLICATIONS: &str = "/api/BursaryApplication";
pub const FORGOT_PASSWORD: &str = "/api/Account/forgot-password";
pub const DASHBOARD_MENU: &str = "/api/menu/dashboard";

/// Error text used when a failed response carries no `message`
pub mod fallback {
    pub const DASHBOARD: &str = "Failed to fetch dashboard data.";
    pub const EVENT_REGISTRATIONS: &str = "Failed to fetch event registrations.";
    pub const STUDENT_MARK_UPLOADS: &str = "Failed to fetch student mark uploads.";
    pub const CUSTOMERS: &str = "Failed to fetch customers.";
    pub const BURSARY_APPLICATIONS: &str = "Failed to fetch bursary applications.";
    pub const ASSIGN_ROLE: &str = "Failed to assign role";
    pub const FORGOT_PASSWORD: &str = "Failed to request password reset";
    pub const MENU: &str = "Failed to fetch menu.";
}

const EVENT_REGISTRATIONS: &str = "/EventRegistration";
const STUDENT_MARK_UPLOADS: &str = "/api/StudentMarksUpload/uploads/paginated";
const ASSIGN_ROLE: &str = "/api/Account/assign-role";

/// `GET /EventRegistration?pageNumber=&pageSize=[&searchQuery=]`
pub fn event_registrations(req: &PageRequest) -> String {
    let mut path = format!(
        "{}?pageNumber={}&pageSize={}",
        EVENT_REGISTRATIONS,
        req.page_number,
        req.page_size.get()
    );
    let query = req.search_query.trim();
    if !query.is_empty() {
        path.push_str("&searchQuery=");
        path.push_str(&urlencoding::encode(query));
    }
    path
}

/// `GET /api/StudentMarksUpload/uploads/paginated?page=&pageSize=`
pub fn student_mark_uploads(req: &PageRequest) -> String {
    format!(
        "{}?page={}&pageSize={}",
        STUDENT_MARK_UPLOADS,
        req.page_number,
        req.page_size.get()
    )
}

/// `POST /api/Account/assign-role/{appUserId}`
pub fn assign_role(app_user_id: &str) -> String {
    format!("{}/{}", ASSIGN_ROLE, urlencoding::encode(app_user_id))
}

/// Join a base URL and a path without doubling the slash
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
