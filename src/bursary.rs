//! Bursary Applications
//!
//! Review cards for submitted applications. Each card can be expanded to
//! show the full application and accepted, which grants the applicant's
//! account the student role.

use serde::{Deserialize, Serialize};

use crate::error::AdminResult;
use crate::format::{format_date, format_plain_amount};
use crate::models::BursaryApplication;

pub const ACCEPTED_MESSAGE: &str = "Bursary accepted and role assigned successfully.";

pub use crate::endpoints::fallback::ASSIGN_ROLE as ASSIGN_ROLE_FAILED;

/// Role granted on acceptance
pub const STUDENT_ROLE: &str = "student";

/// Body of the assign-role call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRoleBody {
    pub role: String,
}

/// A role assignment to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignRoleRequest {
    pub app_user_id: String,
    pub body: AssignRoleBody,
}

/// UI state of one application card
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCard {
    pub application: BursaryApplication,
    expanded: bool,
    accepted: bool,
    pending: bool,
    message: Option<String>,
}

impl ApplicationCard {
    pub fn new(application: BursaryApplication) -> Self {
        Self {
            application,
            expanded: false,
            accepted: false,
            pending: false,
            message: None,
        }
    }

    pub fn title(&self) -> String {
        self.application.full_name()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// "Expand" or "Collapse"
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Collapse"
        } else {
            "Expand"
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The accept button disappears once acceptance succeeded
    pub fn show_accept(&self) -> bool {
        !self.accepted
    }

    /// Disabled while a request is in flight
    pub fn accept_disabled(&self) -> bool {
        self.pending
    }

    /// Start accepting. Returns the request to send, or `None` when already
    /// accepted or in flight.
    pub fn begin_accept(&mut self) -> Option<AssignRoleRequest> {
        if self.accepted || self.pending {
            return None;
        }
        let app_user_id = self.application.app_user_id.trim();
        if app_user_id.is_empty() {
            self.message = Some("Error: Application has no linked account".to_string());
            return None;
        }

        self.pending = true;
        Some(AssignRoleRequest {
            app_user_id: app_user_id.to_string(),
            body: AssignRoleBody {
                role: STUDENT_ROLE.to_string(),
            },
        })
    }

    /// Record the outcome of the assign-role call
    pub fn finish_accept(&mut self, result: AdminResult<()>) {
        self.pending = false;
        match result {
            Ok(()) => {
                self.accepted = true;
                self.message = Some(ACCEPTED_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(app_user_id = %self.application.app_user_id, error = %e, "Assign role failed");
                self.message = Some(format!("Error: {}", e.user_message()));
            }
        }
    }
}

/// What a detail row shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    /// Document link, labelled "View Document"
    Link(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: DetailValue,
}

/// A block of rows, optionally headed (a dependent, a vehicle, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailGroup {
    pub heading: Option<String>,
    pub rows: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub groups: Vec<DetailGroup>,
}

fn text(label: &'static str, value: Option<&str>) -> Detail {
    Detail {
        label,
        value: DetailValue::Text(value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()),
    }
}

fn money(label: &'static str, value: Option<f64>) -> Detail {
    Detail {
        label,
        value: DetailValue::Text(format_plain_amount(value)),
    }
}

fn date(label: &'static str, value: Option<&str>) -> Detail {
    text(label, value.map(format_date).as_deref())
}

fn link(label: &'static str, href: Option<&str>) -> Detail {
    Detail {
        label,
        value: DetailValue::Link(href.filter(|h| !h.is_empty()).map(str::to_string)),
    }
}

fn group(heading: Option<String>, rows: Vec<Detail>) -> DetailGroup {
    DetailGroup { heading, rows }
}

/// All sections of an expanded card, in display order
pub fn detail_sections(app: &BursaryApplication) -> Vec<DetailSection> {
    let personal = vec![group(
        None,
        vec![
            text("Full Name", Some(&app.full_name())),
            date("Date of Birth", app.date_of_birth.as_deref()),
            text("SA ID Number", app.said_number.as_deref()),
            text("Place of Birth", app.place_of_birth.as_deref()),
            text("Email", app.email.as_deref()),
            text("Contact Number", app.contact_number.as_deref()),
            text("Home Physical Address", app.home_physical_address.as_deref()),
            text("Home Postal Address", app.home_postal_address.as_deref()),
        ],
    )];

    let education = vec![group(
        None,
        vec![
            text("Institution Applied For", app.institution_applied_for.as_deref()),
            text("Degree or Diploma", app.degree_or_diploma.as_deref()),
            text("Year of Study and Commencement", app.year_of_study_and_commencement.as_deref()),
            text("Student Number", app.student_number.as_deref()),
            money("Approximate Funding Required", app.approximate_funding_required),
        ],
    )];

    let documents = vec![group(
        None,
        vec![
            link("Tertiary Subjects and Results", app.tertiary_subjects_and_results_url.as_deref()),
            link("Grade 12 Subjects and Results", app.grade12_subjects_and_results_url.as_deref()),
            link("Grade 11 Subjects and Results", app.grade11_subjects_and_results_url.as_deref()),
        ],
    )];

    let financial = app
        .financial_details_list
        .iter()
        .map(|d| {
            group(
                d.role.clone(),
                vec![
                    text("Full Name", d.full_name.as_deref()),
                    text("SA ID Number", d.said_number.as_deref()),
                    text("Occupation", d.occupation.as_deref()),
                    text("Marital Status", d.marital_status.as_deref()),
                    money("Gross Monthly Income", d.gross_monthly_income),
                    money("Other Income", d.other_income),
                ],
            )
        })
        .collect();

    let dependents = app
        .dependents
        .iter()
        .map(|d| {
            group(
                None,
                vec![
                    text("Full Name", d.full_name.as_deref()),
                    text("Relationship", d.relationship_to_applicant.as_deref()),
                    text("Age", d.age.map(|a| a.to_string()).as_deref()),
                    text("Institution Name", d.institution_name.as_deref()),
                ],
            )
        })
        .collect();

    let mut assets: Vec<DetailGroup> = Vec::new();
    assets.extend(app.fixed_properties.iter().map(|p| {
        group(
            Some("Fixed Properties".to_string()),
            vec![
                text("Physical Address", p.physical_address.as_deref()),
                text("ERF No/Township", p.erf_no_township.as_deref()),
                text("Date Purchased", p.date_purchased.as_deref()),
                money("Purchase Price", p.purchase_price),
                money("Municipal Value", p.municipal_value),
                money("Present Value", p.present_value),
            ],
        )
    }));
    assets.extend(app.vehicles.iter().map(|v| {
        group(
            Some("Vehicles".to_string()),
            vec![
                text("Make/Model/Year", v.make_model_year.as_deref()),
                text("Registration Number", v.registration_number.as_deref()),
                money("Present Value", v.present_value),
            ],
        )
    }));
    assets.extend(app.investments.iter().map(|i| {
        group(
            Some("Investments".to_string()),
            vec![
                text("Company", i.company.as_deref()),
                text("Description", i.description.as_deref()),
                money("Market Value", i.market_value),
            ],
        )
    }));
    assets.push(group(
        None,
        vec![
            money("Jewellery Value", app.jewellery_value),
            money("Furniture and Fittings Value", app.furniture_and_fittings_value),
            money("Equipment Value", app.equipment_value),
        ],
    ));
    assets.extend(app.other_assets.iter().map(|a| {
        group(
            None,
            vec![text("Description", a.description.as_deref()), money("Value", a.value)],
        )
    }));

    let mut liabilities = vec![group(
        None,
        vec![
            money("Overdrafts", app.overdrafts),
            money("Unsecured Loans", app.unsecured_loans),
            money("Credit Card Debts", app.credit_card_debts),
            money("Income Tax Debts", app.income_tax_debts),
        ],
    )];
    liabilities.extend(app.other_liabilities.iter().map(|l| {
        group(
            None,
            vec![text("Description", l.description.as_deref()), money("Amount", l.amount)],
        )
    }));

    let declaration = vec![group(
        None,
        vec![
            text("Declaration Signed By", app.declaration_signed_by.as_deref()),
            date("Declaration Date", app.declaration_date.as_deref()),
        ],
    )];

    vec![
        DetailSection { title: "Personal Details", groups: personal },
        DetailSection { title: "Education Details", groups: education },
        DetailSection { title: "Documents", groups: documents },
        DetailSection { title: "Financial Details", groups: financial },
        DetailSection { title: "Dependents", groups: dependents },
        DetailSection { title: "Assets", groups: assets },
        DetailSection { title: "Liabilities", groups: liabilities },
        DetailSection { title: "Declaration", groups: declaration },
    ]
}
