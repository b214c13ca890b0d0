//! Explicit session value carrying the identity provider's bearer token.

use std::fmt::{Debug, Formatter};

use crate::domain::types::{NonEmptyString, TypeConstraintError};

/// Token holder for requests made on behalf of a signed-in user.
///
/// A session is started once the identity provider hands over a token and
/// ended on logout; anonymous callers simply have no session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: NonEmptyString,
}

impl Session {
    /// Starts a session, rejecting blank tokens.
    pub fn start<S: Into<String>>(token: S) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            token: NonEmptyString::new(token)?,
        })
    }

    /// Bearer token attached to authenticated requests.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Ends the session, dropping the token.
    pub fn end(self) {}
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}
