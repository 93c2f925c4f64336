//! Browser Storage
//!
//! `localStorage` access and the token store backed by it.

use saleaf_admin::auth::TokenStore;
use saleaf_admin::error::{AdminError, AdminResult};

/// Key holding the signed-in user's bearer token
pub const TOKEN_KEY: &str = "saleaf_token";
/// Display label saved with the token
pub const USER_KEY: &str = "saleaf_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a value; missing storage reads as missing value
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) -> bool {
    local_storage()
        .map(|storage| storage.set_item(key, value).is_ok())
        .unwrap_or(false)
}

pub fn remove_item(key: &str) -> bool {
    local_storage()
        .map(|storage| storage.remove_item(key).is_ok())
        .unwrap_or(false)
}

/// Token store over `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> AdminResult<Option<String>> {
        Ok(get_item(TOKEN_KEY).filter(|t| !t.trim().is_empty()))
    }

    fn save(&self, token: &str) -> AdminResult<()> {
        if set_item(TOKEN_KEY, token) {
            Ok(())
        } else {
            Err(AdminError::Config("Browser storage unavailable".to_string()))
        }
    }

    fn load_user(&self) -> AdminResult<Option<String>> {
        Ok(get_item(USER_KEY).filter(|u| !u.trim().is_empty()))
    }

    fn save_user(&self, user: Option<&str>) -> AdminResult<()> {
        match user {
            Some(user) if !set_item(USER_KEY, user) => {
                Err(AdminError::Config("Browser storage unavailable".to_string()))
            }
            Some(_) => Ok(()),
            None => {
                remove_item(USER_KEY);
                Ok(())
            }
        }
    }

    fn clear(&self) -> AdminResult<()> {
        remove_item(TOKEN_KEY);
        remove_item(USER_KEY);
        Ok(())
    }
}
