//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use saleaf_admin::auth::Session;
use saleaf_admin::dashboard::{Notice, NoticeLevel};
use saleaf_admin::nav::MenuState;

use super::storage::LocalTokenStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signed-in session; the only source of API credentials
    pub session: RwSignal<Session>,
    /// Sidebar menu for the current session
    pub menu: RwSignal<MenuState>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree.
///
/// The session is restored from browser storage here and nowhere else.
pub fn provide_global_state() {
    let session = match Session::init(&LocalTokenStore) {
        Ok(session) => session,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to restore session: {}", e).into());
            Session::anonymous()
        }
    };

    let state = GlobalState {
        session: create_rw_signal(session),
        menu: create_rw_signal(MenuState::Loading),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_logged_in(&self) -> bool {
        self.session.with(Session::is_logged_in)
    }

    /// Snapshot of the session for one request
    pub fn session(&self) -> Session {
        self.session.get_untracked()
    }

    /// Sign in with a bearer token and persist it
    pub fn login(&self, token: &str, user: Option<&str>) -> Result<(), String> {
        let mut session = self.session.get_untracked();
        session
            .login(&LocalTokenStore, token, user)
            .map_err(|e| e.user_message())?;
        self.session.set(session);
        Ok(())
    }

    /// Tear the session down and forget the stored token
    pub fn logout(&self) {
        let mut session = self.session.get_untracked();
        if let Err(e) = session.logout(&LocalTokenStore) {
            web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
        }
        self.session.set(session);
        self.menu.set(MenuState::Loading);
        self.show_success("Signed out");
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Raise a transient notification
    pub fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => self.show_success(&notice.message),
            NoticeLevel::Error => self.show_error(&notice.message),
        }
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
