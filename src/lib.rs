//! # SALEAF Admin
//!
//! Administrative front-end core for the SALEAF donation, bursary and event
//! registration platform.
//!
//! ## Features
//!
//! - **Paginated lists**: server-side paging with stale-response discard,
//!   client-side filter/sort/slice for small collections
//! - **Dashboard**: summary cards, monthly donation series, recent transactions
//! - **Bursary review**: expandable application cards with role assignment
//! - **Account recovery**: validated forgot-password flow
//! - **Session-aware navigation**: header links and the API-driven sidebar menu
//!
//! ## Modules
//!
//! Everything outside the `native` feature compiles for `wasm32` and is shared
//! with the browser front-end.
//!
//! - [`listing`]: list view state machines
//! - [`dashboard`]: dashboard derivations
//! - [`nav`]: header links and menu tree
//! - [`auth`]: session context
//! - [`api`]: HTTP client (native)
//! - [`cli`]: command-line interface (native)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saleaf_admin::api::{AdminApi, ApiClient};
//! use saleaf_admin::auth::{FileTokenStore, Session};
//! use saleaf_admin::config::Config;
//! use saleaf_admin::listing::ServerPaginatedList;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let session = Session::init(&FileTokenStore::new(config.token_file()))?;
//!     let api = ApiClient::new(&config.api, session)?;
//!
//!     let mut registrations = ServerPaginatedList::new(config.listing.page_size);
//!     registrations
//!         .refresh_with(|req| async move { api.event_registrations(&req).await })
//!         .await?;
//!
//!     println!("{} registrations", registrations.total_items());
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod auth;
pub mod bursary;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod listing;
pub mod models;
pub mod nav;
pub mod pagination;
pub mod table;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod render;

// Re-export top-level types for convenience
pub use error::{AdminError, AdminResult, ValidationErrors};

pub use pagination::{Page, PageDescriptor, PageSize};

pub use listing::{
    ClientListItem, ClientPaginatedList, CustomerSortKey, ListView, PageRequest,
    ServerPaginatedList,
};

pub use auth::{MemoryTokenStore, Session, TokenStore};

pub use dashboard::{DashboardState, Notice, NoticeLevel};

#[cfg(feature = "native")]
pub use api::{AdminApi, ApiClient};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
