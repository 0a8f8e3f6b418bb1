//! Trip Form Component
//!
//! Destination and return date; changing either re-derives the schedule
//! and reloads places.

use chrono::NaiveDate;
use leptos::prelude::*;
use planner_core::Trip;

use super::top_places::refresh_places;
use crate::context::use_planner;
use crate::store::{store_set_trip, use_planner_store, PlannerStateStoreFields};

#[component]
pub fn TripForm() -> impl IntoView {
    let ctx = use_planner();
    let store = use_planner_store();

    let initial = store.trip().get_untracked();
    let (destination, set_destination) = signal(initial.destination.clone());
    let (return_date, set_return_date) = signal(initial.return_date.format("%Y-%m-%d").to_string());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let dest = destination.get();
        if dest.trim().is_empty() {
            set_error.set(Some("Destination must not be empty".to_string()));
            return;
        }
        match NaiveDate::parse_from_str(&return_date.get(), "%Y-%m-%d") {
            Ok(date) => {
                set_error.set(None);
                store_set_trip(&store, Trip::new(dest.trim(), date), &ctx);
                refresh_places(store, &ctx);
            }
            Err(e) => set_error.set(Some(format!("Invalid return date: {}", e))),
        }
    };

    view! {
        <form class="trip-form" on:submit=submit>
            <input
                type="text"
                placeholder="Destination"
                prop:value=move || destination.get()
                on:input=move |ev| set_destination.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || return_date.get()
                on:input=move |ev| set_return_date.set(event_target_value(&ev))
            />
            <button type="submit">"Plan"</button>
            {move || error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </form>
    }
}
