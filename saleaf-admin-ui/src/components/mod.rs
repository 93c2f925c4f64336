//! UI Components
//!
//! Reusable Leptos components for the admin pages.

pub mod chart;
pub mod data_table;
pub mod loading;
pub mod nav;
pub mod pagination;
pub mod summary_card;
pub mod toast;

pub use chart::IncomeChart;
pub use data_table::{DataTable, TableContent};
pub use loading::{CardSkeleton, ChartSkeleton, InlineLoading, Loading, LoadingOverlay, TableSkeleton};
pub use nav::{Header, Sidebar};
pub use pagination::{PageControls, PageSizeSelect};
pub use summary_card::SummaryCardView;
pub use toast::Toast;
