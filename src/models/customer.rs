//! Customer records (client-paginated list)

use serde::{Deserialize, Serialize};

use super::{null_as_default, string_or_number};

/// One customer card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    /// Status may arrive as a label or a numeric code
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub avatar: Option<serde_json::Value>,
}

/// Body of `GET /api/customer/list`
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customers: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_status_and_contact() {
        let json = r#"{"id": 7, "name": "Thandi", "email": "t@x.org",
            "contact": 821234567, "age": 34, "country": "ZA", "status": 1}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "7");
        assert_eq!(customer.contact, "821234567");
        assert_eq!(customer.status, "1");
        assert!(customer.skills.is_empty());
    }

    #[test]
    fn test_list_envelope() {
        let json = r#"{"customers": [{"id": "a", "name": "A"}, {"id": "b", "name": null}]}"#;
        let list: CustomerListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.customers.len(), 2);
        assert_eq!(list.customers[1].name, "");
    }
}
