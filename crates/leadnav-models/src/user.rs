//! User identity key.
//!
//! A [`UserId`] is the sole lookup key of the cookie store: at most one
//! cookie record exists per user. The value is opaque to LeadNav — it is
//! whatever identifier the token issuer put into the JWT — and is only
//! ever taken from a verified token, never from a request body.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of an authenticated LeadNav user.
///
/// # Examples
///
/// ```
/// use leadnav_models::UserId;
///
/// let id = UserId::new("u-42");
/// assert_eq!(id.to_string(), "u-42");
///
/// let id2: UserId = "u-42".into();
/// assert_eq!(id, id2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a new `UserId` from a string slice.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for UserId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
