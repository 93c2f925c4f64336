//! Event registrations (server-paginated list)

use serde::{Deserialize, Serialize};

use super::{null_as_default, string_or_number};
use crate::pagination::{Page, PageDescriptor};

/// One registration row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Registrant email
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_date: String,
    /// The API spells this field `pacakageName`
    #[serde(rename = "pacakageName", default, deserialize_with = "null_as_default")]
    pub package_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_paid: bool,
}

impl EventRegistration {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn payment_status(&self) -> &'static str {
        if self.is_paid {
            "Paid"
        } else {
            "Unpaid"
        }
    }
}

/// Body of `GET /EventRegistration`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationPage {
    #[serde(default)]
    pub total_items: usize,
    #[serde(default)]
    pub page_number: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<EventRegistration>,
}

impl From<EventRegistrationPage> for Page<EventRegistration> {
    fn from(body: EventRegistrationPage) -> Self {
        Page {
            descriptor: PageDescriptor {
                page_number: body.page_number,
                page_size: body.page_size,
                total_items: body.total_items,
                total_pages: body.total_pages,
            },
            items: body.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_keeps_wire_names() {
        let json = r#"{
            "totalItems": 11, "pageNumber": 2, "pageSize": 5, "totalPages": 3,
            "data": [{
                "id": "r-1", "userName": "sipho@example.org", "firstName": "Sipho",
                "lastName": "Dlamini", "paymentId": "pay_1", "eventName": "Gala Dinner",
                "registrationDate": "2024-05-01T10:30:00", "pacakageName": "VIP",
                "amount": 1500, "isPaid": true
            }]
        }"#;
        let body: EventRegistrationPage = serde_json::from_str(json).unwrap();
        let page: Page<EventRegistration> = body.into();

        assert_eq!(page.descriptor.total_items, 11);
        assert_eq!(page.descriptor.total_pages, 3);
        assert_eq!(page.items[0].package_name, "VIP");
        assert_eq!(page.items[0].full_name(), "Sipho Dlamini");
        assert_eq!(page.items[0].payment_status(), "Paid");
    }
}
