//! HTTP API Client
//!
//! Functions for communicating with the SALEAF admin REST API. Every call
//! takes the session it runs under; authenticated calls fail before any
//! request is sent when nobody is signed in.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use saleaf_admin::account::ForgotPasswordRequest;
use saleaf_admin::auth::Session;
use saleaf_admin::bursary::AssignRoleRequest;
use saleaf_admin::endpoints::{self, fallback};
use saleaf_admin::error::{AdminError, AdminResult};
use saleaf_admin::listing::PageRequest;
use saleaf_admin::models::{
    BursaryApplication, Customer, CustomerListResponse, DashboardData, EventRegistration,
    EventRegistrationPage, MenuItem, MenuResponse, StudentMarkUpload, StudentMarkUploadPage,
};
use saleaf_admin::pagination::Page;

use crate::state::storage;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://saleafapi-production.up.railway.app";

const API_URL_KEY: &str = "saleaf_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = storage::get_item(API_URL_KEY)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    storage::set_item(API_URL_KEY, url.trim());
}

// ============ Request helpers ============

fn transport_error(e: gloo_net::Error) -> AdminError {
    AdminError::Transport(e.to_string())
}

/// Body of a successful response, or the error it stands for
async fn read_body(response: Response, fallback: &str) -> AdminResult<String> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(transport_error)?;

    if ok {
        Ok(body)
    } else {
        Err(AdminError::from_status(status, &body, fallback))
    }
}

async fn get_json<T: DeserializeOwned>(session: &Session, path: &str, fallback: &str) -> AdminResult<T> {
    let bearer = session.bearer_header()?;
    let url = endpoints::join(&get_api_base(), path);

    let response = Request::get(&url)
        .header("Authorization", &bearer)
        .send()
        .await
        .map_err(transport_error)?;

    let body = read_body(response, fallback).await?;
    serde_json::from_str(&body).map_err(|e| AdminError::Decode(e.to_string()))
}

async fn post_json<B: Serialize>(
    session: &Session,
    path: &str,
    body: &B,
    fallback: &str,
    authenticated: bool,
) -> AdminResult<()> {
    let url = endpoints::join(&get_api_base(), path);

    let mut builder: RequestBuilder = Request::post(&url);
    if authenticated {
        builder = builder.header("Authorization", &session.bearer_header()?);
    } else if let Some(token) = session.token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .json(body)
        .map_err(|e| AdminError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(transport_error)?;

    read_body(response, fallback).await.map(|_| ())
}

// ============ API Functions ============

/// Fetch the dashboard aggregate
pub async fn fetch_dashboard(session: &Session) -> AdminResult<DashboardData> {
    get_json(session, endpoints::DASHBOARD, fallback::DASHBOARD).await
}

/// Fetch one page of event registrations
pub async fn fetch_event_registrations(
    session: &Session,
    req: &PageRequest,
) -> AdminResult<Page<EventRegistration>> {
    let body: EventRegistrationPage = get_json(
        session,
        &endpoints::event_registrations(req),
        fallback::EVENT_REGISTRATIONS,
    )
    .await?;
    Ok(body.into())
}

/// Fetch one page of student mark uploads
pub async fn fetch_student_mark_uploads(
    session: &Session,
    req: &PageRequest,
) -> AdminResult<Page<StudentMarkUpload>> {
    let body: StudentMarkUploadPage = get_json(
        session,
        &endpoints::student_mark_uploads(req),
        fallback::STUDENT_MARK_UPLOADS,
    )
    .await?;
    Ok(body.into_page(req.page_number, req.page_size.get()))
}

/// Fetch the full customer list
pub async fn fetch_customers(session: &Session) -> AdminResult<Vec<Customer>> {
    let body: CustomerListResponse =
        get_json(session, endpoints::CUSTOMER_LIST, fallback::CUSTOMERS).await?;
    Ok(body.customers)
}

pub async fn fetch_bursary_applications(session: &Session) -> AdminResult<Vec<BursaryApplication>> {
    get_json(session, endpoints::BURSARY_APPLICATIONS, fallback::BURSARY_APPLICATIONS).await
}

/// Assign a role to an applicant's account
pub async fn assign_role(session: &Session, req: &AssignRoleRequest) -> AdminResult<()> {
    post_json(
        session,
        &endpoints::assign_role(&req.app_user_id),
        &req.body,
        fallback::ASSIGN_ROLE,
        true,
    )
    .await
}

/// Request a password reset code. Works without a session.
pub async fn forgot_password(session: &Session, req: &ForgotPasswordRequest) -> AdminResult<()> {
    post_json(session, endpoints::FORGOT_PASSWORD, req, fallback::FORGOT_PASSWORD, false).await
}

/// Fetch the sidebar menu tree
pub async fn fetch_dashboard_menu(session: &Session) -> AdminResult<MenuItem> {
    let body: MenuResponse = get_json(session, endpoints::DASHBOARD_MENU, fallback::MENU).await?;
    Ok(body.dashboard)
}
