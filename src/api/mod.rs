//! Admin API access
//!
//! [`AdminApi`] is the seam between the views/CLI and the REST API.
//! [`ApiClient`] implements it over HTTP with the session's bearer token.

pub mod client;

pub use client::ApiClient;

use async_trait::async_trait;

use crate::account::ForgotPasswordRequest;
use crate::bursary::AssignRoleRequest;
use crate::error::AdminResult;
use crate::listing::PageRequest;
use crate::models::{
    BursaryApplication, Customer, DashboardData, EventRegistration, MenuItem, StudentMarkUpload,
};
use crate::pagination::Page;

/// Operations the admin front-end performs against the API
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn dashboard(&self) -> AdminResult<DashboardData>;

    async fn event_registrations(&self, req: &PageRequest) -> AdminResult<Page<EventRegistration>>;

    async fn student_mark_uploads(&self, req: &PageRequest) -> AdminResult<Page<StudentMarkUpload>>;

    /// The full customer list; paginated locally
    async fn customers(&self) -> AdminResult<Vec<Customer>>;

    async fn bursary_applications(&self) -> AdminResult<Vec<BursaryApplication>>;

    /// Grant a role. Never retried automatically.
    async fn assign_role(&self, req: &AssignRoleRequest) -> AdminResult<()>;

    /// Does not require a session
    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> AdminResult<()>;

    async fn dashboard_menu(&self) -> AdminResult<MenuItem>;
}
