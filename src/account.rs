//! Account recovery
//!
//! The forgot-password form: field validation, submission state and the
//! delayed redirect to the code verification screen.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AdminResult, ValidationErrors};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Must be a valid email";
pub const EMAIL_TOO_LONG: &str = "email must be at most 255 characters";
pub const EMAIL_MAX_LEN: usize = 255;

/// Notification shown once the reset mail was requested
pub const RESET_MAIL_SENT: &str = "Check mail for reset code";

/// Delay before leaving the form after a successful submit
pub const REDIRECT_DELAY_MS: u64 = 1500;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

/// Body of the forgot-password call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Navigation to perform after a delay, replacing the current history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay_ms: u64,
    pub replace: bool,
}

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Field errors for an email address; empty when valid
pub fn validate_email(email: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let email = email.trim();

    if email.is_empty() {
        errors.add("email", EMAIL_REQUIRED);
    } else if email.chars().count() > EMAIL_MAX_LEN {
        errors.add("email", EMAIL_TOO_LONG);
    } else if !is_valid_email(email) {
        errors.add("email", EMAIL_INVALID);
    }
    errors
}

/// Where to go after the reset mail was requested. Signed-in users stay in
/// the authenticated area.
pub fn code_verification_path(email: &str, logged_in: bool) -> String {
    let base = if logged_in {
        "/auth/code-verification"
    } else {
        "/code-verification"
    };
    format!("{}?email={}", base, urlencoding::encode(email))
}

/// State of the forgot-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    email: String,
    touched: bool,
    submitting: bool,
    succeeded: bool,
    errors: ValidationErrors,
    submit_error: Option<String>,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
        if self.touched {
            self.errors = validate_email(&self.email);
        }
    }

    /// Field lost focus; start showing its errors
    pub fn blur(&mut self) {
        self.touched = true;
        self.errors = validate_email(&self.email);
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Helper text under the email field
    pub fn email_error(&self) -> Option<&str> {
        if self.touched {
            self.errors.get("email")
        } else {
            None
        }
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Validate and lock the form. Nothing is sent when a field is invalid.
    pub fn begin_submit(&mut self) -> Result<ForgotPasswordRequest, ValidationErrors> {
        self.touched = true;
        self.errors = validate_email(&self.email);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        self.submitting = true;
        self.submit_error = None;
        Ok(ForgotPasswordRequest {
            email: self.email.trim().to_string(),
        })
    }

    /// Apply the server outcome. On success, returns the redirect to
    /// schedule; on failure the error is shown and the form re-enabled.
    pub fn finish_submit(&mut self, result: AdminResult<()>, logged_in: bool) -> Option<Redirect> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.succeeded = true;
                tracing::info!("Password reset mail requested");
                Some(Redirect {
                    path: code_verification_path(self.email.trim(), logged_in),
                    delay_ms: REDIRECT_DELAY_MS,
                    replace: true,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Forgot password request failed");
                self.succeeded = false;
                self.submit_error = Some(e.user_message());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;

    #[test]
    fn test_validate_email_messages() {
        assert_eq!(validate_email("").get("email"), Some(EMAIL_REQUIRED));
        assert_eq!(validate_email("   ").get("email"), Some(EMAIL_REQUIRED));
        assert_eq!(validate_email("not-an-email").get("email"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b").get("email"), Some(EMAIL_INVALID));
        assert!(validate_email("admin@saleaf.org.za").is_empty());

        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&long).get("email"), Some(EMAIL_TOO_LONG));
    }

    #[test]
    fn test_email_pattern_compiled_once() {
        assert!(is_valid_email("bursaries@saleaf.org.za"));
        let first = EMAIL_RE.get().and_then(Option::as_ref).map(|re| re as *const Regex);
        assert!(first.is_some());

        assert!(!is_valid_email("bursaries@"));
        let second = EMAIL_RE.get().and_then(Option::as_ref).map(|re| re as *const Regex);
        assert_eq!(first, second);
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(
            code_verification_path("a+b@x.org", true),
            "/auth/code-verification?email=a%2Bb%40x.org"
        );
        assert_eq!(
            code_verification_path("me@x.org", false),
            "/code-verification?email=me%40x.org"
        );
    }

    #[test]
    fn test_invalid_submit_sends_nothing() {
        let mut form = ForgotPasswordForm::new();
        form.set_email("nope");
        let errors = form.begin_submit().unwrap_err();
        assert_eq!(errors.get("email"), Some(EMAIL_INVALID));
        assert!(!form.is_submitting());
        assert_eq!(form.email_error(), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ForgotPasswordForm::new();
        form.set_email("x");
        assert!(form.email_error().is_none());
        form.blur();
        assert_eq!(form.email_error(), Some(EMAIL_INVALID));
        form.set_email("x@y.com");
        assert!(form.email_error().is_none());
    }

    #[test]
    fn test_successful_submit_redirects() {
        let mut form = ForgotPasswordForm::new();
        form.set_email("student@uni.ac.za");
        let req = form.begin_submit().unwrap();
        assert_eq!(req.email, "student@uni.ac.za");
        assert!(form.is_submitting());

        let redirect = form.finish_submit(Ok(()), false).unwrap();
        assert_eq!(redirect.path, "/code-verification?email=student%40uni.ac.za");
        assert_eq!(redirect.delay_ms, 1500);
        assert!(redirect.replace);
        assert!(form.succeeded());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failed_submit_reenables_form() {
        let mut form = ForgotPasswordForm::new();
        form.set_email("student@uni.ac.za");
        form.begin_submit().unwrap();

        let redirect = form.finish_submit(
            Err(AdminError::Status {
                status: 404,
                message: "User not found".to_string(),
            }),
            true,
        );
        assert!(redirect.is_none());
        assert_eq!(form.submit_error(), Some("User not found"));
        assert!(!form.is_submitting());
    }
}
