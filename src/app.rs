//! PackUpPal Frontend App
//!
//! Trip planner view: trip header, places, cuisine, packing and feedback email.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthBridge;
use crate::components::{
    FeedbackForm, LocalCuisine, NavBar, PackingChecklist, TopPlaces, TripForm,
};
use crate::context::{load_config, PlannerContext};
use crate::store::PlannerState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = PlannerContext::new(load_config());
    let store = Store::new(PlannerState::new(&ctx));

    // Auth SDK -> session, for the lifetime of the app
    let bridge = match AuthBridge::attach(ctx.session.clone()) {
        Ok(bridge) => Some(bridge),
        Err(e) => {
            log::error!("Sign-in unavailable: {}", e);
            None
        }
    };
    let bridge = StoredValue::new_local(bridge);
    on_cleanup(move || bridge.set_value(None));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                <TripForm />
                <TopPlaces />
                <LocalCuisine />
                <PackingChecklist />
                <FeedbackForm />
            </main>
        </div>
    }
}
