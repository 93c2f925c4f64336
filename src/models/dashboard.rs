//! Dashboard aggregate (`GET /api/DashBoard`)

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One aggregate snapshot, fetched once per dashboard view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_donations_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_earnings_month: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_events: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_of_students: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_donations: Vec<MonthlyDonation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub donations_transactions: Vec<DonationTransaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDonation {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationTransaction {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_paid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_anonymous: bool,
    #[serde(default)]
    pub app_user_id: Option<String>,
    #[serde(default)]
    pub app_user: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_payload() {
        let json = r#"{
            "allDonationsAmount": 2500000, "totalEarningsMonth": 999.5,
            "numberOfEvents": 4, "numberOfStudents": 31,
            "monthlyDonations": [{"year": 2024, "month": 3, "totalEarnings": 1200.5}],
            "donationsTransactions": [{"id": 9, "amount": 50, "currency": "ZAR",
                "paymentId": "p9", "isPaid": false, "createdAt": "2024-03-02T11:00:00",
                "isAnonymous": true, "appUserId": null, "appUser": null}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.number_of_students, 31);
        assert_eq!(data.monthly_donations[0].month, 3);
        assert!(data.donations_transactions[0].app_user_id.is_none());
    }

    #[test]
    fn test_null_amounts_and_flags() {
        let json = r#"{
            "monthlyDonations": [{"year": 2024, "month": 5, "totalEarnings": null}],
            "donationsTransactions": [{"id": 3, "amount": null, "currency": "ZAR",
                "isPaid": null, "isAnonymous": null}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.monthly_donations[0].total_earnings, 0.0);

        let tx = &data.donations_transactions[0];
        assert_eq!(tx.amount, 0.0);
        assert!(!tx.is_paid);
        assert!(!tx.is_anonymous);
    }
}
