//! Wire Models
//!
//! Records mirrored from the admin REST API. Field names follow the API's
//! camelCase JSON exactly; a few endpoints use their own envelope names and
//! those are preserved per endpoint.

pub mod bursary;
pub mod customer;
pub mod dashboard;
pub mod event_registration;
pub mod menu;
pub mod student_mark;

pub use bursary::{
    BursaryApplication, Dependent, FinancialDetail, FixedProperty, Investment, OtherAsset,
    OtherLiability, Vehicle,
};
pub use customer::{Customer, CustomerListResponse};
pub use dashboard::{DashboardData, DonationTransaction, MonthlyDonation};
pub use event_registration::{EventRegistration, EventRegistrationPage};
pub use menu::{MenuItem, MenuItemType, MenuResponse};
pub use student_mark::{StudentMarkUpload, StudentMarkUploadPage};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string or a number and keep its text form
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        Some(Raw::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}
