//! Dashboard Summary
//!
//! Derived, display-only values for the dashboard: summary cards, chart
//! series and the recent transactions table, plus the view's load state.

use crate::error::AdminError;
use crate::format::{format_amount, format_date, format_grouped_amount, month_abbrev};
use crate::models::{DashboardData, DonationTransaction, MonthlyDonation};

/// Message used for both the inline error and the notification
pub const LOAD_FAILED_MESSAGE: &str = crate::endpoints::fallback::DASHBOARD;

/// Rows shown in the recent transactions table
pub const RECENT_TRANSACTIONS: usize = 5;

/// Icon shown on a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Wallet,
    Book,
    Calendar,
    CloudChange,
}

/// Color accent of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Primary,
    Warning,
    Success,
    Error,
}

/// One summary card
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub icon: CardIcon,
    pub color: CardColor,
}

/// The four cards in the top row
pub fn summary_cards(data: &DashboardData) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "All Donations",
            value: format_amount(data.all_donations_amount),
            icon: CardIcon::Wallet,
            color: CardColor::Primary,
        },
        SummaryCard {
            title: "Total Earnings This Month",
            value: format_amount(data.total_earnings_month),
            icon: CardIcon::Book,
            color: CardColor::Warning,
        },
        SummaryCard {
            title: "Number of Events",
            value: data.number_of_events.to_string(),
            icon: CardIcon::Calendar,
            color: CardColor::Success,
        },
        SummaryCard {
            title: "Number of Students",
            value: data.number_of_students.to_string(),
            icon: CardIcon::CloudChange,
            color: CardColor::Error,
        },
    ]
}

/// One chart point
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// `Mon/YYYY`
    pub label: String,
    pub value: f64,
}

/// Monthly donations in chronological order, labelled for the x-axis.
/// The input is left untouched.
pub fn monthly_series(donations: &[MonthlyDonation]) -> Vec<ChartPoint> {
    let mut sorted = donations.to_vec();
    sorted.sort_by_key(|d| (d.year, d.month));
    sorted
        .into_iter()
        .map(|d| ChartPoint {
            label: format!("{}/{}", month_abbrev(d.month), d.year),
            value: d.total_earnings,
        })
        .collect()
}

/// Sum of all monthly earnings
pub fn total_income(donations: &[MonthlyDonation]) -> f64 {
    donations.iter().map(|d| d.total_earnings).sum()
}

/// Total income formatted for the card footer
pub fn total_income_label(donations: &[MonthlyDonation]) -> String {
    format_grouped_amount(total_income(donations))
}

/// One row of the recent transactions table
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub amount: String,
    pub currency: String,
    pub payment_id: String,
    pub status: &'static str,
    pub paid: bool,
    pub date: String,
}

/// The first few transactions, formatted for display
pub fn recent_transactions(transactions: &[DonationTransaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .take(RECENT_TRANSACTIONS)
        .map(|tx| TransactionRow {
            id: format!("#{}", tx.id),
            amount: format_grouped_amount(tx.amount),
            currency: tx.currency.clone(),
            payment_id: tx.payment_id.clone(),
            status: if tx.is_paid { "Paid" } else { "Pending" },
            paid: tx.is_paid,
            date: format_date(&tx.created_at),
        })
        .collect()
}

/// Load state of the dashboard. Nothing renders until it leaves `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(Box<DashboardData>),
    Failed(String),
}

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.to_string(),
        }
    }
}

impl DashboardState {
    /// Settle the state from the single fetch. A failure also yields the
    /// notification to raise.
    pub fn settle(result: Result<DashboardData, AdminError>) -> (Self, Option<Notice>) {
        match result {
            Ok(data) => (DashboardState::Ready(Box::new(data)), None),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching dashboard data");
                (
                    DashboardState::Failed(LOAD_FAILED_MESSAGE.to_string()),
                    Some(Notice::error(LOAD_FAILED_MESSAGE)),
                )
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> DashboardData {
        DashboardData {
            all_donations_amount: 2_500_000.0,
            total_earnings_month: 999.5,
            number_of_events: 4,
            number_of_students: 31,
            monthly_donations: vec![
                MonthlyDonation { year: 2024, month: 2, total_earnings: 200.0 },
                MonthlyDonation { year: 2023, month: 12, total_earnings: 100.0 },
                MonthlyDonation { year: 2024, month: 1, total_earnings: 50.25 },
            ],
            donations_transactions: (1..=7)
                .map(|id| DonationTransaction {
                    id,
                    amount: 1234.5,
                    currency: "ZAR".to_string(),
                    payment_id: format!("pay_{}", id),
                    is_paid: id % 2 == 0,
                    created_at: "2024-03-02T11:00:00".to_string(),
                    is_anonymous: false,
                    app_user_id: None,
                    app_user: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_cards_format_amounts() {
        let cards = summary_cards(&data());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "R2.50e+6");
        assert_eq!(cards[1].value, "R999.50");
        assert_eq!(cards[2].value, "4");
        assert_eq!(cards[3].icon, CardIcon::CloudChange);
    }

    #[test]
    fn test_monthly_series_is_chronological() {
        let series = monthly_series(&data().monthly_donations);
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec/2023", "Jan/2024", "Feb/2024"]);
    }

    #[test]
    fn test_total_income() {
        let d = data();
        assert_eq!(total_income(&d.monthly_donations), 350.25);
        assert_eq!(total_income_label(&d.monthly_donations), "R350.25");
    }

    #[test]
    fn test_recent_transactions_first_five() {
        let rows = recent_transactions(&data().donations_transactions);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, "#1");
        assert_eq!(rows[0].status, "Pending");
        assert_eq!(rows[1].status, "Paid");
        assert_eq!(rows[0].amount, "R1,234.50");
        assert_eq!(rows[0].date, "3/2/2024");
    }

    #[test]
    fn test_settle_failure_raises_notice() {
        let (state, notice) = DashboardState::settle(Err(AdminError::Transport("refused".into())));
        assert_eq!(state, DashboardState::Failed(LOAD_FAILED_MESSAGE.to_string()));
        assert_eq!(notice, Some(Notice::error(LOAD_FAILED_MESSAGE)));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_settle_success() {
        let (state, notice) = DashboardState::settle(Ok(data()));
        assert!(notice.is_none());
        assert!(!state.is_loading());
        assert_eq!(state.data().map(|d| d.number_of_events), Some(4));
    }

    #[test]
    fn test_default_is_loading() {
        assert!(DashboardState::default().is_loading());
    }
}
