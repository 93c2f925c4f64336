//! Bursary applications
//!
//! The full application as submitted by a student. Most scalar fields are
//! optional on the wire; list sections default to empty.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BursaryApplication {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Account that receives the student role on acceptance
    #[serde(default, deserialize_with = "null_as_default")]
    pub app_user_id: String,

    // Personal details
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<String>,
    pub said_number: Option<String>,
    pub place_of_birth: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub home_physical_address: Option<String>,
    pub home_postal_address: Option<String>,

    // Education
    pub institution_applied_for: Option<String>,
    pub degree_or_diploma: Option<String>,
    pub year_of_study_and_commencement: Option<String>,
    pub student_number: Option<String>,
    pub approximate_funding_required: Option<f64>,

    // Documents
    pub tertiary_subjects_and_results_url: Option<String>,
    pub grade12_subjects_and_results_url: Option<String>,
    pub grade11_subjects_and_results_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub financial_details_list: Vec<FinancialDetail>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependents: Vec<Dependent>,

    // Assets
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_properties: Vec<FixedProperty>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicles: Vec<Vehicle>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub investments: Vec<Investment>,
    pub jewellery_value: Option<f64>,
    pub furniture_and_fittings_value: Option<f64>,
    pub equipment_value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_assets: Vec<OtherAsset>,

    // Liabilities
    pub overdrafts: Option<f64>,
    pub unsecured_loans: Option<f64>,
    pub credit_card_debts: Option<f64>,
    pub income_tax_debts: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_liabilities: Vec<OtherLiability>,

    // Declaration
    pub declaration_signed_by: Option<String>,
    pub declaration_date: Option<String>,
}

impl BursaryApplication {
    /// "Name Surname", skipping missing parts
    pub fn full_name(&self) -> String {
        [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Income details for a parent, guardian or spouse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDetail {
    pub role: Option<String>,
    pub full_name: Option<String>,
    pub said_number: Option<String>,
    pub occupation: Option<String>,
    pub marital_status: Option<String>,
    pub gross_monthly_income: Option<f64>,
    pub other_income: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub full_name: Option<String>,
    pub relationship_to_applicant: Option<String>,
    pub age: Option<u32>,
    pub institution_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedProperty {
    pub physical_address: Option<String>,
    pub erf_no_township: Option<String>,
    pub date_purchased: Option<String>,
    pub purchase_price: Option<f64>,
    pub municipal_value: Option<f64>,
    pub present_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub make_model_year: Option<String>,
    pub registration_number: Option<String>,
    pub present_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub company: Option<String>,
    pub description: Option<String>,
    pub market_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherAsset {
    pub description: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherLiability {
    pub description: Option<String>,
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_application() {
        let json = r#"{
            "appUserId": "u-42", "name": "Lerato", "surname": "Mokoena",
            "grade12SubjectsAndResultsUrl": "https://docs/g12.pdf",
            "financialDetailsList": [{"role": "Mother", "grossMonthlyIncome": 12000}],
            "dependents": null,
            "saidNumber": "0001015800080"
        }"#;
        let app: BursaryApplication = serde_json::from_str(json).unwrap();

        assert_eq!(app.app_user_id, "u-42");
        assert_eq!(app.full_name(), "Lerato Mokoena");
        assert_eq!(app.grade12_subjects_and_results_url.as_deref(), Some("https://docs/g12.pdf"));
        assert_eq!(app.said_number.as_deref(), Some("0001015800080"));
        assert_eq!(app.financial_details_list[0].gross_monthly_income, Some(12000.0));
        assert!(app.dependents.is_empty());
        assert!(app.vehicles.is_empty());
    }
}
