//! Credential wrapper for account passwords, SMTP passwords and AI API keys.

use serde::Deserialize;
use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// A credential read from the configuration file.
///
/// Formatting with `{}` or `{:?}` prints `[REDACTED]`, so a whole
/// `UserProfile` can be logged without leaking the login password. The value
/// is only reachable through [`SecretString::expose_secret`].
///
/// ```ignore
/// let user: UserProfile = ...;
/// debug!(?user, "Loaded account");            // password shows as [REDACTED]
/// login(&user.account, user.password.expose_secret());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The raw credential, for the login or SMTP call that needs it.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// True when the field was omitted or left blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
