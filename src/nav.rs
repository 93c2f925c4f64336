//! Navigation
//!
//! Header links gated on the session's logged-in flag, and the API-driven
//! sidebar menu with its icon keys resolved to a closed set of icons.

use crate::dashboard::Notice;
use crate::endpoints::fallback;
use crate::error::AdminError;
use crate::models::{MenuItem, MenuItemType};

/// Where a header entry leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// In-app route
    Route(&'static str),
    /// Invoke the session's logout action
    Logout,
}

/// One entry in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Header layout; both variants show the same entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Desktop,
    Mobile,
}

const PUBLIC_LINKS: [NavEntry; 3] = [
    NavEntry { label: "Home", target: NavTarget::Route("/") },
    NavEntry { label: "Donate", target: NavTarget::Route("/donate") },
    NavEntry { label: "Application Form", target: NavTarget::Route("/application_form") },
];

/// Header entries for the given login state.
///
/// The layout does not change the entries, only how they are drawn.
pub fn header_entries(logged_in: bool, _layout: NavLayout) -> Vec<NavEntry> {
    let mut entries = PUBLIC_LINKS.to_vec();
    if logged_in {
        entries.push(NavEntry { label: "Logout", target: NavTarget::Logout });
    } else {
        entries.push(NavEntry { label: "Login", target: NavTarget::Route("/login") });
        entries.push(NavEntry { label: "Register", target: NavTarget::Route("/register") });
    }
    entries
}

/// Icons the sidebar knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuIcon {
    #[default]
    Navigation,
    Dashboard,
    Components,
    Loading,
}

impl MenuIcon {
    /// Total mapping from the API's icon key; unknown keys get the default
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some("navigation") => MenuIcon::Navigation,
            Some("dashboard") => MenuIcon::Dashboard,
            Some("components") => MenuIcon::Components,
            Some("loading") => MenuIcon::Loading,
            _ => MenuIcon::default(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MenuIcon::Navigation => "🏠",
            MenuIcon::Dashboard => "📈",
            MenuIcon::Components => "📦",
            MenuIcon::Loading => "⟳",
        }
    }
}

/// A menu node ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub id: String,
    pub title: String,
    pub item_type: MenuItemType,
    pub url: Option<String>,
    pub icon: MenuIcon,
    pub breadcrumbs: bool,
    pub children: Vec<MenuNode>,
}

/// Resolve an API menu tree. Collapsible items carry their resolved
/// children; plain items never do.
pub fn resolve_menu(item: &MenuItem) -> MenuNode {
    let children = match item.item_type {
        MenuItemType::Item => Vec::new(),
        MenuItemType::Group | MenuItemType::Collapse => {
            item.children.iter().map(resolve_menu).collect()
        }
    };

    MenuNode {
        id: item.id.clone(),
        title: item.title.clone(),
        item_type: item.item_type,
        url: item.url.clone(),
        icon: MenuIcon::from_key(item.icon.as_deref()),
        breadcrumbs: item.breadcrumbs.unwrap_or(true),
        children,
    }
}

/// Placeholder menu shown while the menu request is in flight
pub fn loading_menu() -> MenuNode {
    MenuNode {
        id: "group-dashboard-loading".to_string(),
        title: "dashboard".to_string(),
        item_type: MenuItemType::Group,
        url: None,
        icon: MenuIcon::Loading,
        breadcrumbs: true,
        children: vec![MenuNode {
            id: "default1".to_string(),
            title: "loading".to_string(),
            item_type: MenuItemType::Item,
            url: Some("/dashboard/default".to_string()),
            icon: MenuIcon::default(),
            breadcrumbs: false,
            children: Vec::new(),
        }],
    }
}

/// Sidebar menu lifecycle for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Loading,
    Ready(MenuNode),
    Failed(String),
}

impl MenuState {
    /// Settle from the menu fetch. A failure also yields the notification
    /// to raise.
    pub fn settle(result: Result<MenuItem, AdminError>) -> (Self, Option<Notice>) {
        match result {
            Ok(item) => (MenuState::Ready(resolve_menu(&item)), None),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching menu");
                (
                    MenuState::Failed(fallback::MENU.to_string()),
                    Some(Notice::error(fallback::MENU)),
                )
            }
        }
    }

    /// Tree to draw: the placeholder while loading, nothing after a failure
    pub fn visible_menu(&self) -> Option<MenuNode> {
        match self {
            MenuState::Loading => Some(loading_menu()),
            MenuState::Ready(node) => Some(node.clone()),
            MenuState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MenuState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_entries() {
        let labels: Vec<&str> = header_entries(false, NavLayout::Desktop)
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, vec!["Home", "Donate", "Application Form", "Login", "Register"]);
    }

    #[test]
    fn test_logged_in_entries() {
        let entries = header_entries(true, NavLayout::Desktop);
        assert_eq!(entries.last().map(|e| e.target), Some(NavTarget::Logout));
        assert!(entries.iter().all(|e| e.label != "Login"));
    }

    #[test]
    fn test_layouts_match() {
        for logged_in in [true, false] {
            assert_eq!(
                header_entries(logged_in, NavLayout::Desktop),
                header_entries(logged_in, NavLayout::Mobile)
            );
        }
    }

    #[test]
    fn test_icon_mapping_total() {
        assert_eq!(MenuIcon::from_key(Some("dashboard")), MenuIcon::Dashboard);
        assert_eq!(MenuIcon::from_key(Some("rocket")), MenuIcon::Navigation);
        assert_eq!(MenuIcon::from_key(None), MenuIcon::Navigation);
    }

    #[test]
    fn test_resolve_nested_menu() {
        let json = r#"{
            "id": "group-dashboard", "title": "dashboard", "type": "group", "icon": "dashboard",
            "children": [
                {"id": "apps", "title": "apps", "type": "collapse", "icon": "components",
                 "children": [{"id": "leaf", "title": "leaf", "type": "item", "icon": "unknown",
                               "url": "/apps/leaf"}]},
                {"id": "single", "title": "single", "type": "item", "url": "/single",
                 "children": [{"id": "ignored", "title": "ignored", "type": "item"}]}
            ]
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        let menu = resolve_menu(&item);

        assert_eq!(menu.icon, MenuIcon::Dashboard);
        assert_eq!(menu.children.len(), 2);
        assert_eq!(menu.children[0].icon, MenuIcon::Components);
        assert_eq!(menu.children[0].children[0].icon, MenuIcon::Navigation);
        assert!(menu.children[1].children.is_empty());
    }

    #[test]
    fn test_loading_menu_shape() {
        let menu = loading_menu();
        assert_eq!(menu.icon, MenuIcon::Loading);
        assert_eq!(menu.children[0].url.as_deref(), Some("/dashboard/default"));
    }

    #[test]
    fn test_menu_state_ready() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id": "group-dashboard", "title": "dashboard", "type": "group", "children": []}"#,
        )
        .unwrap();
        let (state, notice) = MenuState::settle(Ok(item));
        assert!(notice.is_none());
        assert_eq!(state.visible_menu().map(|m| m.id), Some("group-dashboard".to_string()));
    }

    #[test]
    fn test_menu_failure_stops_loading() {
        assert_eq!(MenuState::default().visible_menu(), Some(loading_menu()));

        let (state, notice) = MenuState::settle(Err(AdminError::Unauthenticated));
        assert_eq!(state.error(), Some(fallback::MENU));
        assert!(state.visible_menu().is_none());
        assert_eq!(notice, Some(Notice::error(fallback::MENU)));
    }
}
