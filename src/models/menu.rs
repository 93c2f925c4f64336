//! Sidebar menu tree (`GET /api/menu/dashboard`)

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Kind of menu node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemType {
    Group,
    Collapse,
    #[default]
    #[serde(other)]
    Item,
}

/// Menu node as served by the API; `icon` is a free-form key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", default)]
    pub item_type: MenuItemType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub breadcrumbs: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<MenuItem>,
}

/// Body of the menu endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    pub dashboard: MenuItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_is_item() {
        let json = r#"{"id": "x", "title": "X", "type": "divider"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, MenuItemType::Item);
    }
}
