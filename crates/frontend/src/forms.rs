//! Form state and local validation
//!
//! Nothing in here touches the network: a form that fails validation never
//! produces a request.

use tasklist_http::{ClientError, Credentials};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shown for any failed login; the server's reason is not leaked
pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Registration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.confirm_password.is_empty()
    }

    /// Live hint under the confirm field
    pub fn shows_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }

    pub fn validate(&self) -> Result<Credentials, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if password_len(&self.password) < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        Ok(Credentials::new(self.email.clone(), self.password.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// `None` for an empty password, which shows no meter at all
    pub fn of(password: &str) -> Option<Self> {
        match password_len(password) {
            0 => None,
            n if n < MIN_PASSWORD_LEN => Some(Self::Weak),
            n if n < 10 => Some(Self::Medium),
            _ => Some(Self::Strong),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium password",
            Self::Strong => "Strong password",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "bg-red-500",
            Self::Medium => "bg-amber-500",
            Self::Strong => "bg-green-500",
        }
    }
}

/// Length as the browser counts it, in UTF-16 code units
fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Width of the strength meter in percent, full at 12 characters
pub fn strength_meter_percent(password: &str) -> u32 {
    let len = password_len(password).min(12) as u32;
    len * 100 / 12
}

pub fn registration_error_message(error: &ClientError) -> String {
    error
        .server_message()
        .unwrap_or_else(|| REGISTRATION_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            email: "a@b.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());
        form.email = "a@b.com".into();
        assert!(!form.can_submit());
        form.password = "secret1".into();
        assert!(form.can_submit());
        assert_eq!(form.credentials(), Credentials::new("a@b.com", "secret1"));
    }

    #[test]
    fn test_mismatch_is_checked_before_length() {
        assert_eq!(
            register("abc", "abd").validate(),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(
            register("abc", "abc").validate(),
            Err(FormError::PasswordTooShort)
        );
        assert!(register("secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords don't match"
        );
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_mismatch_hint_waits_for_confirmation() {
        assert!(!register("secret1", "").shows_mismatch());
        assert!(register("secret1", "secret").shows_mismatch());
        assert!(!register("secret1", "secret1").shows_mismatch());
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(PasswordStrength::of(""), None);
        assert_eq!(PasswordStrength::of("abc"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::of("abcdef"), Some(PasswordStrength::Medium));
        assert_eq!(
            PasswordStrength::of("abcdefghij"),
            Some(PasswordStrength::Strong)
        );
        assert_eq!(strength_meter_percent("abcdef"), 50);
        assert_eq!(strength_meter_percent("a very long passphrase"), 100);
        assert_eq!(strength_meter_percent(&"x".repeat(50_000_000)), 100);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is two UTF-16 units
        assert_eq!(register("😀😀😀", "😀😀😀").validate().map(|_| ()), Ok(()));
        assert_eq!(
            register("😀😀", "😀😀").validate(),
            Err(FormError::PasswordTooShort)
        );
        assert_eq!(PasswordStrength::of("😀😀😀"), Some(PasswordStrength::Medium));
    }

    #[test]
    fn test_registration_error_falls_back_to_generic() {
        let err = ClientError::ServerError {
            status: 500,
            message: "<html>oops</html>".into(),
        };
        assert_eq!(registration_error_message(&err), REGISTRATION_FAILED);

        let err = ClientError::BadRequest(r#"{"message":"Email taken"}"#.into());
        assert_eq!(registration_error_message(&err), "Email taken");
    }
}
