//! Table columns
//!
//! Header labels and display cells for each tabular entity, shared by the
//! browser tables and the CLI's table/CSV output.

use crate::dashboard::TransactionRow;
use crate::format::{format_date, format_fixed_amount};
use crate::models::{BursaryApplication, Customer, EventRegistration, StudentMarkUpload};

/// An entity shown as one table row
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    /// One display cell per header
    fn cells(&self) -> Vec<String>;
}

/// Route of the registration detail screen
pub fn registration_details_path(id: &str) -> String {
    format!("/event-registration/details/{}", urlencoding::encode(id))
}

impl TableRow for EventRegistration {
    fn headers() -> &'static [&'static str] {
        &[
            "Registrant Name",
            "Email",
            "Event Name",
            "Registration Date",
            "Package Name",
            "Amount",
            "Payment Status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.user_name.clone(),
            self.event_name.clone(),
            format_date(&self.registration_date),
            self.package_name.clone(),
            format_fixed_amount(self.amount),
            self.payment_status().to_string(),
        ]
    }
}

impl TableRow for StudentMarkUpload {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Type", "Upload Date", "File"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.clone(),
            format_date(&self.upload_date),
            self.file_url.clone(),
        ]
    }
}

impl TableRow for Customer {
    fn headers() -> &'static [&'static str] {
        &["Customer Name", "Email", "Contact", "Age", "Country", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.contact.clone(),
            self.age.to_string(),
            self.country.clone(),
            self.status.clone(),
        ]
    }
}

impl TableRow for TransactionRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Amount", "Currency", "Payment ID", "Status", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.amount.clone(),
            self.currency.clone(),
            self.payment_id.clone(),
            self.status.to_string(),
            self.date.clone(),
        ]
    }
}

impl TableRow for BursaryApplication {
    fn headers() -> &'static [&'static str] {
        &["Applicant", "User ID", "Email", "Institution", "Degree or Diploma"]
    }

    fn cells(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        vec![
            self.full_name(),
            self.app_user_id.clone(),
            opt(&self.email),
            opt(&self.institution_applied_for),
            opt(&self.degree_or_diploma),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_cells() {
        let reg: EventRegistration = serde_json::from_value(serde_json::json!({
            "id": 4, "userName": "jane@x.org", "firstName": "Jane", "lastName": "Doe",
            "paymentId": "p", "eventName": "Golf Day", "registrationDate": "2024-05-01T10:30:00",
            "pacakageName": "Gold", "amount": 150, "isPaid": false
        }))
        .unwrap();

        let cells = reg.cells();
        assert_eq!(cells.len(), EventRegistration::headers().len());
        assert_eq!(cells[0], "Jane Doe");
        assert_eq!(cells[3], "5/1/2024");
        assert_eq!(cells[5], "R 150.00");
        assert_eq!(cells[6], "Unpaid");
    }

    #[test]
    fn test_details_path() {
        assert_eq!(registration_details_path("17"), "/event-registration/details/17");
    }

    #[test]
    fn test_bursary_cells_fill_gaps() {
        let app = BursaryApplication {
            name: Some("Ann".to_string()),
            app_user_id: "u-1".to_string(),
            ..Default::default()
        };
        assert_eq!(app.cells(), vec!["Ann", "u-1", "-", "-", "-"]);
    }
}
