//! Navigation Bar Component
//!
//! Brand, signed-in user and the two sign-in providers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use planner_core::session::{sign_in, sign_out};
use planner_core::{AuthProvider, User};

use crate::auth::BrowserIdentity;
use crate::context::use_planner;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_planner();
    let (user, set_user) = signal(None::<User>);
    let (auth_error, set_auth_error) = signal(None::<String>);

    let subscription = ctx.session.subscribe(move |u| set_user.set(u.cloned()));
    on_cleanup(move || drop(subscription));

    let session = ctx.session.clone();
    let on_sign_in = move |provider: AuthProvider| {
        let session = session.clone();
        spawn_local(async move {
            match sign_in(&BrowserIdentity, &session, provider).await {
                Ok(_) => set_auth_error.set(None),
                Err(e) => set_auth_error.set(Some(e.to_string())),
            }
        });
    };
    let on_sign_in_github = on_sign_in.clone();

    let session = ctx.session.clone();
    let on_sign_out = move |_: web_sys::MouseEvent| {
        let session = session.clone();
        spawn_local(async move {
            if let Err(e) = sign_out(&BrowserIdentity, &session).await {
                set_auth_error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <nav class="navbar">
            <span class="brand">"PackUpPal"</span>
            {move || match user.get() {
                Some(u) => view! {
                    <div class="auth-status signed-in">
                        <span>"Signed in as: " {u.email.unwrap_or(u.uid)}</span>
                        <button class="secondary-btn" on:click=on_sign_out.clone()>"Sign Out"</button>
                    </div>
                }.into_any(),
                None => {
                    let on_sign_in = on_sign_in.clone();
                    let on_sign_in_github = on_sign_in_github.clone();
                    view! {
                        <div class="auth-status signed-out">
                            <button class="primary-btn" on:click=move |_| on_sign_in(AuthProvider::Google)>
                                {format!("{} Sign In", AuthProvider::Google.label())}
                            </button>
                            <button class="secondary-btn" on:click=move |_| on_sign_in_github(AuthProvider::GitHub)>
                                {format!("{} Sign In", AuthProvider::GitHub.label())}
                            </button>
                        </div>
                    }.into_any()
                }
            }}
            {move || auth_error.get().map(|msg| view! { <span class="auth-error">{msg}</span> })}
        </nav>
    }
}
