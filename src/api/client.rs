//! Admin REST API Client
//!
//! HTTP client for the SALEAF admin API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::AdminApi;
use crate::account::ForgotPasswordRequest;
use crate::auth::Session;
use crate::bursary::AssignRoleRequest;
use crate::config::ApiConfig;
use crate::endpoints::{self, fallback};
use crate::error::{AdminError, AdminResult};
use crate::listing::PageRequest;
use crate::models::{
    BursaryApplication, Customer, CustomerListResponse, DashboardData, EventRegistration,
    EventRegistrationPage, MenuItem, MenuResponse, StudentMarkUpload, StudentMarkUploadPage,
};
use crate::pagination::Page;

/// Admin API client bound to one session
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &ApiConfig, session: Session) -> AdminResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AdminError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> AdminResult<T> {
        let bearer = self.session.bearer_header()?;
        let url = endpoints::join(&self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(response, fallback).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "Unexpected response shape");
            AdminError::Decode(e.to_string())
        })
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
        authenticated: bool,
    ) -> AdminResult<()> {
        let url = endpoints::join(&self.base_url, path);
        tracing::debug!(%url, "POST");

        let mut request = self.client.post(&url).json(body);
        if authenticated {
            request = request.header(AUTHORIZATION, self.session.bearer_header()?);
        } else if let Some(token) = self.session.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(transport_error)?;
        read_body(response, fallback).await.map(|_| ())
    }
}

/// Body of a successful response, or the error it stands for
async fn read_body(response: Response, fallback: &str) -> AdminResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if status.is_success() {
        Ok(body)
    } else {
        tracing::warn!(status = status.as_u16(), "API request failed");
        Err(AdminError::from_status(status.as_u16(), &body, fallback))
    }
}

fn transport_error(e: reqwest::Error) -> AdminError {
    if e.is_timeout() {
        AdminError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        AdminError::Transport("API unavailable".to_string())
    } else {
        AdminError::Transport(e.to_string())
    }
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn dashboard(&self) -> AdminResult<DashboardData> {
        self.get_json(endpoints::DASHBOARD, fallback::DASHBOARD).await
    }

    async fn event_registrations(&self, req: &PageRequest) -> AdminResult<Page<EventRegistration>> {
        let body: EventRegistrationPage = self
            .get_json(&endpoints::event_registrations(req), fallback::EVENT_REGISTRATIONS)
            .await?;
        Ok(body.into())
    }

    async fn student_mark_uploads(&self, req: &PageRequest) -> AdminResult<Page<StudentMarkUpload>> {
        let body: StudentMarkUploadPage = self
            .get_json(&endpoints::student_mark_uploads(req), fallback::STUDENT_MARK_UPLOADS)
            .await?;
        Ok(body.into_page(req.page_number, req.page_size.get()))
    }

    async fn customers(&self) -> AdminResult<Vec<Customer>> {
        let body: CustomerListResponse = self
            .get_json(endpoints::CUSTOMER_LIST, fallback::CUSTOMERS)
            .await?;
        Ok(body.customers)
    }

    async fn bursary_applications(&self) -> AdminResult<Vec<BursaryApplication>> {
        self.get_json(endpoints::BURSARY_APPLICATIONS, fallback::BURSARY_APPLICATIONS)
            .await
    }

    async fn assign_role(&self, req: &AssignRoleRequest) -> AdminResult<()> {
        tracing::info!(app_user_id = %req.app_user_id, role = %req.body.role, "Assigning role");
        self.post_json(
            &endpoints::assign_role(&req.app_user_id),
            &req.body,
            fallback::ASSIGN_ROLE,
            true,
        )
        .await
    }

    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> AdminResult<()> {
        self.post_json(endpoints::FORGOT_PASSWORD, req, fallback::FORGOT_PASSWORD, false)
            .await
    }

    async fn dashboard_menu(&self) -> AdminResult<MenuItem> {
        let body: MenuResponse = self
            .get_json(endpoints::DASHBOARD_MENU, fallback::MENU)
            .await?;
        Ok(body.dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bursary::ApplicationCard;
    use crate::listing::{ListView, ServerPaginatedList};
    use crate::models::BursaryApplication;
    use crate::pagination::PageSize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, session: Session) -> ApiClient {
        let config = ApiConfig {
            base_url: server.uri(),
            request_timeout_secs: 5,
        };
        ApiClient::new(&config, session).unwrap()
    }

    fn page_request(page: usize, size: PageSize, q: &str) -> PageRequest {
        PageRequest {
            seq: 1,
            page_number: page,
            page_size: size,
            search_query: q.to_string(),
        }
    }

    #[tokio::test]
    async fn test_dashboard_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/DashBoard"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "allDonationsAmount": 2500000,
                "totalEarningsMonth": 999.5,
                "numberOfEvents": 3,
                "numberOfStudents": 12,
                "monthlyDonations": [{"year": 2024, "month": 1, "totalEarnings": 10}],
                "donationsTransactions": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("secret"));
        let data = client.dashboard().await.unwrap();
        assert_eq!(data.number_of_events, 3);
        assert_eq!(data.monthly_donations.len(), 1);
    }

    #[tokio::test]
    async fn test_no_session_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::anonymous());
        let err = client.customers().await.unwrap_err();
        assert!(matches!(err, AdminError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_registration_query_and_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/EventRegistration"))
            .and(query_param("pageNumber", "2"))
            .and(query_param("pageSize", "20"))
            .and(query_param("searchQuery", "gala"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 9, "userName": "jdoe", "firstName": "Jane", "lastName": "Doe",
                    "paymentId": "pay_1", "eventName": "Gala", "registrationDate": "2024-05-01T10:30:00",
                    "pacakageName": "Gold", "amount": 150, "isPaid": true
                }],
                "totalItems": 21, "pageNumber": 2, "pageSize": 20, "totalPages": 2
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("t"));
        let page = client
            .event_registrations(&page_request(2, PageSize::Twenty, "gala"))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].package_name, "Gold");
        assert_eq!(page.descriptor.total_pages, 2);
    }

    #[tokio::test]
    async fn test_upload_failure_shows_inline_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/StudentMarksUpload/uploads/paginated"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("t"));
        let mut list = ServerPaginatedList::<StudentMarkUpload>::default();
        let result = list
            .refresh_with(|req| async move { client.student_mark_uploads(&req).await })
            .await;

        assert_eq!(result, Err(fallback::STUDENT_MARK_UPLOADS.to_string()));
        assert!(matches!(list.view(), ListView::Error(_)));
        assert!(list.view().rows().is_none());
    }

    #[tokio::test]
    async fn test_server_message_is_preferred() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/customer/list"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "Admins only"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("t"));
        let err = client.customers().await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.user_message(), "Admins only");
    }

    #[tokio::test]
    async fn test_accept_posts_for_correct_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/Account/assign-role/u-42"))
            .and(header("Authorization", "Bearer admin"))
            .and(body_json(json!({"role": "student"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("admin"));
        let mut card = ApplicationCard::new(BursaryApplication {
            app_user_id: "u-42".to_string(),
            ..Default::default()
        });

        let req = card.begin_accept().unwrap();
        card.finish_accept(client.assign_role(&req).await);

        assert!(card.is_accepted());
        assert!(!card.show_accept());
    }

    #[tokio::test]
    async fn test_accept_failure_keeps_button() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/Account/assign-role/u-1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("admin"));
        let mut card = ApplicationCard::new(BursaryApplication {
            app_user_id: "u-1".to_string(),
            ..Default::default()
        });

        let req = card.begin_accept().unwrap();
        card.finish_accept(client.assign_role(&req).await);

        assert!(!card.is_accepted());
        assert!(card.show_accept());
        assert_eq!(card.message(), Some("Error: Failed to assign role"));
    }

    #[tokio::test]
    async fn test_forgot_password_without_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/Account/forgot-password"))
            .and(body_json(json!({"email": "a@b.co"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::anonymous());
        let req = ForgotPasswordRequest {
            email: "a@b.co".to_string(),
        };
        assert!(client.forgot_password(&req).await.is_ok());
    }

    #[tokio::test]
    async fn test_menu_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/menu/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dashboard": {"id": "group-dashboard", "title": "dashboard", "type": "group",
                              "children": [{"id": "default", "title": "default", "type": "item",
                                            "url": "/dashboard/default"}]}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("t"));
        let menu = client.dashboard_menu().await.unwrap();
        assert_eq!(menu.children.len(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BursaryApplication"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Session::with_token("t"));
        let err = client.bursary_applications().await.unwrap_err();
        assert!(matches!(err, AdminError::Decode(_)));
    }
}
