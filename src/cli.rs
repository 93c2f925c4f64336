//! SALEAF Admin CLI
//!
//! Command-line access to the admin API:
//! - Dashboard summary
//! - Event registrations, mark uploads, customers and bursary applications
//! - Accepting bursary applications
//! - Password reset requests
//! - Session login/logout

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::account::{ForgotPasswordForm, RESET_MAIL_SENT};
use crate::api::AdminApi;
use crate::auth::{Session, TokenStore};
use crate::bursary::{detail_sections, ApplicationCard, DetailValue};
use crate::config::{generate_default_config, ListingConfig};
use crate::dashboard::{
    monthly_series, recent_transactions, summary_cards, total_income_label, TransactionRow,
};
use crate::error::{AdminError, AdminResult};
use crate::listing::{ClientPaginatedList, CustomerSortKey, ServerPaginatedList};
use crate::models::BursaryApplication;
use crate::nav::{header_entries, resolve_menu, MenuNode, NavLayout, NavTarget};
use crate::pagination::{PageDescriptor, PageSize};
use crate::render::{self, OutputFormat};
use crate::table::TableRow;

#[derive(Parser, Debug)]
#[command(name = "saleaf-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SALEAF donations, bursaries and event registrations admin")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, env = "SALEAF_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the donations dashboard
    Dashboard,

    /// List event registrations (server paginated)
    Registrations {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Rows per page: 5, 10, 20 or 50
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<PageSize>,
        /// Search text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List student mark uploads (server paginated)
    Uploads {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<PageSize>,
    },

    /// List customers (filtered and sorted locally)
    Customers {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Filter by name
        #[arg(short, long)]
        search: Option<String>,
        /// Default, Customer Name, Email, Contact, Age, Country or Status
        #[arg(long, default_value = "Default")]
        sort: String,
    },

    /// List bursary applications
    Bursaries {
        /// Print every section of each application
        #[arg(long)]
        detail: bool,
    },

    /// Accept a bursary application and grant the student role
    Accept {
        /// Applicant account id (appUserId)
        app_user_id: String,
    },

    /// Request a password reset code
    ForgotPassword { email: String },

    /// Show the dashboard sidebar menu
    Menu,

    /// Show the header navigation for the current session
    Nav,

    /// Store a bearer token for later commands
    Login {
        token: String,
        #[arg(long)]
        user: Option<String>,
    },

    /// Forget the stored bearer token
    Logout,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    let value: usize = s.parse().map_err(|_| format!("Invalid page size: {}", s))?;
    PageSize::try_from(value)
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub success: bool,
}

impl Outcome {
    fn ok(text: String) -> Self {
        Self { text, success: true }
    }

    fn failed(text: String) -> Self {
        Self { text, success: false }
    }
}

/// Everything a command may touch
pub struct Context<'a> {
    pub api: &'a dyn AdminApi,
    pub session: &'a Session,
    pub store: &'a dyn TokenStore,
    pub listing: &'a ListingConfig,
    pub format: OutputFormat,
}

/// Run one command
pub async fn run(command: Commands, ctx: Context<'_>) -> AdminResult<Outcome> {
    let api = ctx.api;
    let format = ctx.format;

    match command {
        Commands::Dashboard => {
            let data = api.dashboard().await?;
            let rows = recent_transactions(&data.donations_transactions);
            match format {
                OutputFormat::Json => return render::json(&data).map(Outcome::ok),
                OutputFormat::Csv => {
                    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
                    return render::csv_table(TransactionRow::headers(), &cells).map(Outcome::ok);
                }
                OutputFormat::Table => {}
            }

            let mut out = String::new();
            for card in summary_cards(&data) {
                out.push_str(&format!("{:<26} {}\n", card.title, card.value));
            }
            out.push_str("\nMonthly donations\n");
            for point in monthly_series(&data.monthly_donations) {
                out.push_str(&format!("  {:<9} {}\n", point.label, point.value));
            }
            out.push_str(&format!(
                "Total income: {}\n\nRecent transactions\n",
                total_income_label(&data.monthly_donations)
            ));
            let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
            out.push_str(&render::text_table(TransactionRow::headers(), &cells));
            Ok(Outcome::ok(out))
        }

        Commands::Registrations { page, page_size, search } => {
            let mut list = ServerPaginatedList::new(page_size.unwrap_or(ctx.listing.page_size));
            list.set_search(search.as_deref().unwrap_or(""));
            list.set_page(page);

            if let Err(message) = list
                .refresh_with(|req| async move { api.event_registrations(&req).await })
                .await
            {
                return Ok(Outcome::failed(message));
            }
            paged_output(list.items(), list.descriptor(), format)
        }

        Commands::Uploads { page, page_size } => {
            let mut list = ServerPaginatedList::new(page_size.unwrap_or(ctx.listing.page_size));
            list.set_page(page);

            if let Err(message) = list
                .refresh_with(|req| async move { api.student_mark_uploads(&req).await })
                .await
            {
                return Ok(Outcome::failed(message));
            }
            paged_output(list.items(), list.descriptor(), format)
        }

        Commands::Customers { page, search, sort } => {
            let customers = match api.customers().await {
                Ok(c) => c,
                Err(e) => return Ok(Outcome::failed(e.user_message())),
            };

            let mut list = ClientPaginatedList::new(ctx.listing.customers_per_page);
            list.set_source(customers);
            list.set_query(search.as_deref().unwrap_or(""));
            list.set_sort_key(CustomerSortKey::from_label(&sort));
            list.set_page(page);
            paged_output(list.page_items(), list.descriptor(), format)
        }

        Commands::Bursaries { detail } => {
            let applications = match api.bursary_applications().await {
                Ok(a) => a,
                Err(e) => return Ok(Outcome::failed(e.user_message())),
            };
            if detail && format == OutputFormat::Table {
                return Ok(Outcome::ok(bursary_details(&applications)));
            }
            render::render(&applications, format).map(Outcome::ok)
        }

        Commands::Accept { app_user_id } => {
            let mut card = ApplicationCard::new(BursaryApplication {
                app_user_id,
                ..Default::default()
            });
            if let Some(req) = card.begin_accept() {
                let result = api.assign_role(&req).await;
                card.finish_accept(result);
            }
            let message = card.message().unwrap_or_default().to_string();
            if card.is_accepted() {
                Ok(Outcome::ok(message))
            } else {
                Ok(Outcome::failed(message))
            }
        }

        Commands::ForgotPassword { email } => {
            let mut form = ForgotPasswordForm::new();
            form.set_email(&email);
            let req = match form.begin_submit() {
                Ok(req) => req,
                Err(errors) => {
                    let text = errors.first().map(|(_, m)| m.to_string()).unwrap_or_default();
                    return Ok(Outcome::failed(text));
                }
            };

            let result = api.forgot_password(&req).await;
            match form.finish_submit(result, ctx.session.is_logged_in()) {
                Some(redirect) => Ok(Outcome::ok(format!(
                    "{}\nEnter the code at {}",
                    RESET_MAIL_SENT, redirect.path
                ))),
                None => Ok(Outcome::failed(form.submit_error().unwrap_or_default().to_string())),
            }
        }

        Commands::Menu => {
            let menu = resolve_menu(&api.dashboard_menu().await?);
            let mut out = String::new();
            write_menu(&menu, 0, &mut out);
            Ok(Outcome::ok(out))
        }

        Commands::Nav => {
            let mut out = String::new();
            for entry in header_entries(ctx.session.is_logged_in(), NavLayout::Desktop) {
                let target = match entry.target {
                    NavTarget::Route(path) => path,
                    NavTarget::Logout => "(logout)",
                };
                out.push_str(&format!("{:<18} {}\n", entry.label, target));
            }
            Ok(Outcome::ok(out))
        }

        Commands::Login { token, user } => {
            let mut session = ctx.session.clone();
            session.login(ctx.store, &token, user.as_deref())?;
            Ok(Outcome::ok("Signed in".to_string()))
        }

        Commands::Logout => {
            let mut session = ctx.session.clone();
            session.logout(ctx.store)?;
            Ok(Outcome::ok("Signed out".to_string()))
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .map_err(|e| AdminError::Config(e.to_string()))?;
                    }
                    std::fs::write(&path, &config).map_err(|e| AdminError::Config(e.to_string()))?;
                    Ok(Outcome::ok(format!("Config written to {:?}", path)))
                }
                None => Ok(Outcome::ok(config)),
            }
        }
    }
}

fn paged_output<T>(items: &[T], descriptor: PageDescriptor, format: OutputFormat) -> AdminResult<Outcome>
where
    T: TableRow + serde::Serialize,
{
    let mut out = render::render(items, format)?;
    if format == OutputFormat::Table {
        out.push_str(&format!(
            "Page {} of {} ({} items)\n",
            descriptor.page_number,
            descriptor.total_pages.max(1),
            descriptor.total_items
        ));
    }
    Ok(Outcome::ok(out))
}

fn bursary_details(applications: &[BursaryApplication]) -> String {
    let mut out = String::new();
    for app in applications {
        out.push_str(&format!("== {} ({}) ==\n", app.full_name(), app.app_user_id));
        for section in detail_sections(app) {
            out.push_str(&format!("  {}\n", section.title));
            for group in &section.groups {
                if let Some(heading) = &group.heading {
                    out.push_str(&format!("    [{}]\n", heading));
                }
                for row in &group.rows {
                    let value = match &row.value {
                        DetailValue::Text(text) => text.as_str(),
                        DetailValue::Link(Some(href)) => href.as_str(),
                        DetailValue::Link(None) => "-",
                    };
                    out.push_str(&format!("    {}: {}\n", row.label, value));
                }
            }
        }
        out.push('\n');
    }
    out
}

fn write_menu(node: &MenuNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match &node.url {
        Some(url) => out.push_str(&format!("{}{} {} ({})\n", indent, node.icon.glyph(), node.title, url)),
        None => out.push_str(&format!("{}{} {}\n", indent, node.icon.glyph(), node.title)),
    }
    for child in &node.children {
        write_menu(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::ForgotPasswordRequest;
    use crate::auth::MemoryTokenStore;
    use crate::bursary::AssignRoleRequest;
    use crate::listing::PageRequest;
    use crate::models::{
        Customer, DashboardData, EventRegistration, MenuItem, StudentMarkUpload,
    };
    use crate::pagination::Page;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory API recording the calls it receives
    #[derive(Default)]
    struct FakeApi {
        customers: Vec<Customer>,
        fail_assign: bool,
        requests: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn record(&self, call: String) {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(call);
            }
        }

        fn calls(&self) -> Vec<String> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl AdminApi for FakeApi {
        async fn dashboard(&self) -> AdminResult<DashboardData> {
            Ok(DashboardData {
                all_donations_amount: 2_500_000.0,
                ..Default::default()
            })
        }

        async fn event_registrations(&self, req: &PageRequest) -> AdminResult<Page<EventRegistration>> {
            self.record(format!("registrations {} {} {}", req.page_number, req.page_size, req.search_query));
            Ok(Page {
                items: Vec::new(),
                descriptor: PageDescriptor::local(req.page_number, req.page_size.get(), 0),
            })
        }

        async fn student_mark_uploads(&self, _req: &PageRequest) -> AdminResult<Page<StudentMarkUpload>> {
            Err(AdminError::Status {
                status: 500,
                message: "Failed to fetch student mark uploads.".to_string(),
            })
        }

        async fn customers(&self) -> AdminResult<Vec<Customer>> {
            Ok(self.customers.clone())
        }

        async fn bursary_applications(&self) -> AdminResult<Vec<BursaryApplication>> {
            Ok(Vec::new())
        }

        async fn assign_role(&self, req: &AssignRoleRequest) -> AdminResult<()> {
            self.record(format!("assign {} {}", req.app_user_id, req.body.role));
            if self.fail_assign {
                Err(AdminError::Transport("refused".to_string()))
            } else {
                Ok(())
            }
        }

        async fn forgot_password(&self, req: &ForgotPasswordRequest) -> AdminResult<()> {
            self.record(format!("forgot {}", req.email));
            Ok(())
        }

        async fn dashboard_menu(&self) -> AdminResult<MenuItem> {
            Ok(serde_json::from_str(
                r#"{"id": "g", "title": "dashboard", "type": "group", "icon": "dashboard",
                    "children": [{"id": "d", "title": "default", "type": "item", "url": "/dashboard/default"}]}"#,
            )
            .map_err(|e| AdminError::Decode(e.to_string()))?)
        }
    }

    fn customer(name: &str) -> Customer {
        serde_json::from_value(serde_json::json!({"id": name, "name": name})).unwrap()
    }

    async fn run_with(api: &FakeApi, session: &Session, command: Commands) -> Outcome {
        let store = MemoryTokenStore::new();
        let listing = ListingConfig::default();
        run(
            command,
            Context {
                api,
                session,
                store: &store,
                listing: &listing,
                format: OutputFormat::Table,
            },
        )
        .await
        .unwrap()
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("20"), Ok(PageSize::Twenty));
        assert!(parse_page_size("7").is_err());
        assert!(parse_page_size("ten").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["saleaf-admin", "registrations", "--page-size", "50", "-s", "gala"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Registrations { page: 1, page_size: Some(PageSize::Fifty), .. }
        ));
    }

    #[tokio::test]
    async fn test_registrations_request() {
        let api = FakeApi::default();
        let outcome = run_with(
            &api,
            &Session::with_token("t"),
            Commands::Registrations {
                page: 2,
                page_size: Some(PageSize::Twenty),
                search: Some("gala".to_string()),
            },
        )
        .await;
        assert!(outcome.success);
        assert_eq!(api.calls(), vec!["registrations 2 20 gala"]);
    }

    #[tokio::test]
    async fn test_upload_failure_is_reported() {
        let api = FakeApi::default();
        let outcome = run_with(&api, &Session::with_token("t"), Commands::Uploads { page: 1, page_size: None }).await;
        assert!(!outcome.success);
        assert_eq!(outcome.text, "Failed to fetch student mark uploads.");
    }

    #[tokio::test]
    async fn test_customers_last_page() {
        let api = FakeApi {
            customers: (0..13).map(|i| customer(&format!("c{:02}", i))).collect(),
            ..Default::default()
        };
        let outcome = run_with(
            &api,
            &Session::with_token("t"),
            Commands::Customers { page: 3, search: None, sort: "Customer Name".to_string() },
        )
        .await;
        assert!(outcome.text.contains("Page 3 of 3 (13 items)"));
    }

    #[tokio::test]
    async fn test_accept_reports_outcome() {
        let api = FakeApi::default();
        let outcome = run_with(&api, &Session::with_token("t"), Commands::Accept { app_user_id: "u-9".to_string() }).await;
        assert!(outcome.success);
        assert_eq!(outcome.text, "Bursary accepted and role assigned successfully.");
        assert_eq!(api.calls(), vec!["assign u-9 student"]);

        let failing = FakeApi { fail_assign: true, ..Default::default() };
        let outcome = run_with(&failing, &Session::with_token("t"), Commands::Accept { app_user_id: "u-9".to_string() }).await;
        assert!(!outcome.success);
        assert!(outcome.text.starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_forgot_password_validation_blocks_request() {
        let api = FakeApi::default();
        let outcome = run_with(&api, &Session::anonymous(), Commands::ForgotPassword { email: "bad".to_string() }).await;
        assert!(!outcome.success);
        assert_eq!(outcome.text, "Must be a valid email");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_forgot_password_redirect_target() {
        let api = FakeApi::default();
        let outcome = run_with(
            &api,
            &Session::with_token("t"),
            Commands::ForgotPassword { email: "me@x.org".to_string() },
        )
        .await;
        assert!(outcome.success);
        assert!(outcome.text.contains("/auth/code-verification?email=me%40x.org"));
    }

    #[tokio::test]
    async fn test_nav_depends_on_session() {
        let api = FakeApi::default();
        let anon = run_with(&api, &Session::anonymous(), Commands::Nav).await;
        assert!(anon.text.contains("Register"));
        let signed_in = run_with(&api, &Session::with_token("t"), Commands::Nav).await;
        assert!(signed_in.text.contains("(logout)"));
        assert!(!signed_in.text.contains("Register"));
    }

    #[tokio::test]
    async fn test_dashboard_and_menu_output() {
        let api = FakeApi::default();
        let session = Session::with_token("t");
        let dashboard = run_with(&api, &session, Commands::Dashboard).await;
        assert!(dashboard.text.contains("R2.50e+6"));

        let menu = run_with(&api, &session, Commands::Menu).await;
        assert!(menu.text.contains("  🏠 default (/dashboard/default)"));
    }
}
