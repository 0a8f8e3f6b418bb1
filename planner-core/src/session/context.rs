use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use log::debug;

use super::User;
use crate::domain::{PlannerError, PlannerResult};

type Listener = Box<dyn Fn(Option<&User>) + Send + Sync>;

#[derive(Default)]
struct SessionInner {
    user: Option<User>,
    next_listener: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared, cloneable handle to the current session
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionInner>>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("SessionContext")
            .field("user", &inner.user)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that starts out signed in
    pub fn signed_in(user: User) -> Self {
        let ctx = Self::new();
        ctx.write().user = Some(user);
        ctx
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().user.is_some()
    }

    /// The signed-in user, or `Unauthenticated`
    pub fn require_user(&self) -> PlannerResult<User> {
        self.current_user().ok_or(PlannerError::Unauthenticated)
    }

    /// Record an auth-state change and notify every listener
    pub fn set_user(&self, user: Option<User>) {
        let mut inner = self.write();
        debug!(
            "Auth state changed: {}",
            user.as_ref().map(|u| u.uid.as_str()).unwrap_or("signed out")
        );
        inner.user = user;
        let SessionInner { user, listeners, .. } = &*inner;
        for (_, listener) in listeners {
            listener(user.as_ref());
        }
    }

    /// Register a listener. It is called once immediately with the current
    /// state, then on every change until the subscription is dropped.
    ///
    /// Listeners run under the session lock and must not call back into it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let mut inner = self.write();
        listener(inner.user.as_ref());
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Box::new(listener)));
        Subscription {
            id,
            ctx: Arc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.read().listeners.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Live listener registration; unsubscribes on drop
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    ctx: Weak<RwLock<SessionInner>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.ctx.upgrade() {
            let mut inner = inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
