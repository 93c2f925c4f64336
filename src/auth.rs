//! Session Context
//!
//! The signed-in state shared by the API client and the views. A session is
//! created explicitly from a credential store and torn down on logout; it
//! is handed to whatever needs it rather than living in a global.

use std::sync::Mutex;

use crate::error::{AdminError, AdminResult};

/// Where the bearer token and the signed-in user's label are persisted
/// between runs. `clear` forgets both.
pub trait TokenStore {
    fn load(&self) -> AdminResult<Option<String>>;
    fn save(&self, token: &str) -> AdminResult<()>;
    fn load_user(&self) -> AdminResult<Option<String>>;
    /// `None` removes a previously saved label
    fn save_user(&self, user: Option<&str>) -> AdminResult<()>;
    fn clear(&self) -> AdminResult<()>;
}

/// Store that only lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    user: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            user: Mutex::new(None),
        }
    }
}

fn lock(slot: &Mutex<Option<String>>) -> AdminResult<std::sync::MutexGuard<'_, Option<String>>> {
    slot.lock()
        .map_err(|_| AdminError::Config("token store poisoned".to_string()))
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> AdminResult<Option<String>> {
        Ok(lock(&self.token)?.clone())
    }

    fn save(&self, token: &str) -> AdminResult<()> {
        *lock(&self.token)? = Some(token.to_string());
        Ok(())
    }

    fn load_user(&self) -> AdminResult<Option<String>> {
        Ok(lock(&self.user)?.clone())
    }

    fn save_user(&self, user: Option<&str>) -> AdminResult<()> {
        *lock(&self.user)? = user.map(str::to_string);
        Ok(())
    }

    fn clear(&self) -> AdminResult<()> {
        *lock(&self.token)? = None;
        *lock(&self.user)? = None;
        Ok(())
    }
}

/// Signed-in state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<String>,
}

impl Session {
    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for an already known token. Blank tokens are ignored.
    pub fn with_token(token: &str) -> Self {
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
            user: None,
        }
    }

    /// Restore the session, and the user label saved with it, from a store
    pub fn init(store: &dyn TokenStore) -> AdminResult<Self> {
        let mut session = match store.load()? {
            Some(token) => Self::with_token(&token),
            None => Self::anonymous(),
        };
        if session.is_logged_in() {
            session.user = store
                .load_user()?
                .filter(|u| !u.trim().is_empty());
        }
        tracing::debug!(logged_in = session.is_logged_in(), "Session initialised");
        Ok(session)
    }

    /// Sign in with a token and persist it
    pub fn login(&mut self, store: &dyn TokenStore, token: &str, user: Option<&str>) -> AdminResult<()> {
        let token = token.trim();
        if token.is_empty() {
            let mut errors = crate::error::ValidationErrors::new();
            errors.add("token", "Token is required");
            return Err(AdminError::Validation(errors));
        }
        let user = user.map(str::trim).filter(|u| !u.is_empty());
        store.save(token)?;
        store.save_user(user)?;
        self.token = Some(token.to_string());
        self.user = user.map(str::to_string);
        tracing::info!(user = ?self.user, "Signed in");
        Ok(())
    }

    /// Sign out and forget the stored token
    pub fn logout(&mut self, store: &dyn TokenStore) -> AdminResult<()> {
        store.clear()?;
        self.token = None;
        self.user = None;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// `Authorization` header value; fails when nobody is signed in
    pub fn bearer_header(&self) -> AdminResult<String> {
        self.token
            .as_deref()
            .map(|t| format!("Bearer {}", t))
            .ok_or(AdminError::Unauthenticated)
    }
}

#[cfg(feature = "native")]
pub use file_store::FileTokenStore;

#[cfg(feature = "native")]
mod file_store {
    use std::path::{Path, PathBuf};

    use super::TokenStore;
    use crate::error::{AdminError, AdminResult};

    /// Token kept in a plain file under the user's data directory
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/saleaf-admin/token`
        pub fn default_location() -> Self {
            let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            Self::new(base.join("saleaf-admin").join("token"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Sibling file holding the user label
        fn user_path(&self) -> PathBuf {
            self.path.with_extension("user")
        }
    }

    fn read_trimmed(path: &Path) -> AdminResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let value = content.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AdminError::Config(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn remove_if_present(path: &Path) -> AdminResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AdminError::Config(format!("Failed to remove {}: {}", path.display(), e))),
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> AdminResult<Option<String>> {
            read_trimmed(&self.path)
        }

        fn save(&self, token: &str) -> AdminResult<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AdminError::Config(format!("Failed to create {}: {}", parent.display(), e)))?;
            }
            std::fs::write(&self.path, token)
                .map_err(|e| AdminError::Config(format!("Failed to write token file: {}", e)))
        }

        fn load_user(&self) -> AdminResult<Option<String>> {
            read_trimmed(&self.user_path())
        }

        fn save_user(&self, user: Option<&str>) -> AdminResult<()> {
            match user {
                Some(user) => std::fs::write(self.user_path(), user)
                    .map_err(|e| AdminError::Config(format!("Failed to write user file: {}", e))),
                None => remove_if_present(&self.user_path()),
            }
        }

        fn clear(&self) -> AdminResult<()> {
            remove_if_present(&self.path)?;
            remove_if_present(&self.user_path())
        }
    }
}
