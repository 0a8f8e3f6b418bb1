//! Session context
//!
//! The signed-in identity is held in an explicit context object that is
//! handed to whoever needs it. Views subscribe on mount and keep the
//! returned [`Subscription`] until teardown; dropping it unsubscribes.

mod context;
mod provider;

pub use context::{SessionContext, Subscription};
pub use provider::{sign_in, sign_out, AuthProvider, IdentityProvider};

use serde::{Deserialize, Serialize};

/// Identity reported by the external provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
        }
    }
}
