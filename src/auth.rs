//! Identity Provider Binding
//!
//! Bridges the page's auth SDK shim (`window.__PACKUP_AUTH__`) into
//! planner-core's session context. The shim exposes `signIn(provider)`,
//! `signOut()` and `onAuthStateChanged(callback) -> unsubscribe`.

use async_trait::async_trait;
use planner_core::{AuthProvider, IdentityProvider, PlannerError, PlannerResult, SessionContext, User};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__PACKUP_AUTH__"], js_name = signIn)]
    async fn sign_in_js(provider: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__PACKUP_AUTH__"], js_name = signOut)]
    async fn sign_out_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__PACKUP_AUTH__"], js_name = onAuthStateChanged)]
    fn on_auth_state_changed_js(
        callback: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;
}

fn describe(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

fn parse_user(value: JsValue) -> Option<User> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<User>(value) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring malformed auth user: {}", e);
            None
        }
    }
}

/// Identity provider backed by the page's auth SDK
#[derive(Clone, Copy, Default)]
pub struct BrowserIdentity;

#[async_trait(?Send)]
impl IdentityProvider for BrowserIdentity {
    async fn sign_in(&self, provider: AuthProvider) -> PlannerResult<User> {
        let value = sign_in_js(provider.as_str())
            .await
            .map_err(|e| PlannerError::Auth(describe(e)))?;
        parse_user(value).ok_or_else(|| PlannerError::Auth("provider returned no user".to_string()))
    }

    async fn sign_out(&self) -> PlannerResult<()> {
        sign_out_js()
            .await
            .map(|_| ())
            .map_err(|e| PlannerError::Auth(describe(e)))
    }
}

/// Live auth-state listener; unsubscribes from the SDK on drop
pub struct AuthBridge {
    _callback: Closure<dyn FnMut(JsValue)>,
    unsubscribe: Option<js_sys::Function>,
}

impl AuthBridge {
    /// Mirror every SDK auth-state change into `session`
    pub fn attach(session: SessionContext) -> PlannerResult<Self> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            session.set_user(parse_user(value));
        });
        let unsubscribe = on_auth_state_changed_js(&callback)
            .map_err(|e| PlannerError::Auth(describe(e)))?;
        Ok(Self {
            _callback: callback,
            unsubscribe: Some(unsubscribe),
        })
    }
}

impl Drop for AuthBridge {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            let _ = unsubscribe.call0(&JsValue::NULL);
        }
    }
}
