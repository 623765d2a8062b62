use serde::{Deserialize, Serialize};

use super::User;

/// A user paired with the bearer token the backend issued for them.
///
/// The pairing is structural on purpose: session state is an
/// `Option<Credential>`, so user and token can only ever be set or
/// cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user: User,
    /// Opaque string; the client never inspects it.
    pub token: String,
}

impl Credential {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }
}
