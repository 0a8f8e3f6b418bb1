//! Top Places Component
//!
//! Places to visit, edited optimistically against the travel API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use planner_core::sync::{SyncOutcome, SyncState};
use planner_core::{PlaceId, User};

use crate::components::ConfirmRemove;
use crate::context::{use_planner, PlannerContext};
use crate::store::{use_planner_store, PlannerStateStoreFields, PlannerStore};

/// Wait for a remote result off the render path, then fold it into the list
fn settle<F>(store: PlannerStore, outcome: F)
where
    F: std::future::Future<Output = SyncOutcome> + 'static,
{
    spawn_local(async move {
        let outcome = outcome.await;
        let applied = store.places().write().apply(outcome);
        log::debug!("Place list: {:?}", applied);
    });
}

/// Reload the whole list for the current destination
pub fn refresh_places(store: PlannerStore, ctx: &PlannerContext) {
    let ticket = store.places().write().refresh();
    let api = ctx.api();
    settle(store, async move { ticket.execute(&api).await });
}

fn state_class(state: SyncState) -> &'static str {
    match state {
        SyncState::Idle => "place-item",
        SyncState::PendingAdd | SyncState::PendingRemove => "place-item pending",
        SyncState::Confirmed => "place-item confirmed",
        SyncState::Error => "place-item error",
    }
}

#[component]
pub fn TopPlaces() -> impl IntoView {
    let ctx = use_planner();
    let store = use_planner_store();

    let (edit_mode, set_edit_mode) = signal(false);
    let (new_text, set_new_text) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);
    let (user, set_user) = signal(None::<User>);

    // Editing the list needs a signed-in user
    let subscription = ctx.session.subscribe(move |u| set_user.set(u.cloned()));
    on_cleanup(move || drop(subscription));
    let signed_out = Signal::derive(move || user.get().is_none());

    // Load places on mount
    let mount_ctx = ctx.clone();
    Effect::new(move |_| refresh_places(store, &mount_ctx));

    let add_ctx = ctx.clone();
    let add_place = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let result = store.places().write().add(&text, &add_ctx.session);
        match result {
            Ok(ticket) => {
                set_new_text.set(String::new());
                set_notice.set(None);
                let api = add_ctx.api();
                settle(store, async move { ticket.execute(&api).await });
            }
            Err(e) => set_notice.set(Some(e.to_string())),
        }
    };

    let remove_ctx = ctx.clone();
    let remove_place = move |id: PlaceId| {
        let result = store.places().write().remove(&id, &remove_ctx.session);
        match result {
            Ok(ticket) => {
                let api = remove_ctx.api();
                settle(store, async move { ticket.execute(&api).await });
            }
            Err(e) => set_notice.set(Some(e.to_string())),
        }
    };

    let recommend_ctx = ctx.clone();
    let recommend = move |_: web_sys::MouseEvent| {
        let ticket = store.places().write().recommend();
        let api = recommend_ctx.api();
        settle(store, async move { ticket.execute(&api).await });
    };

    view! {
        <section class="top-places">
            <div class="section-header">
                <h1>"Places to Visit"</h1>
                <button class="icon-btn" on:click=move |_| set_edit_mode.update(|v| *v = !*v)>"Edit"</button>
                <button class="secondary-btn" on:click=recommend disabled=move || store.places().read().is_loading()>
                    "More with AI"
                </button>
            </div>

            {move || store.places().read().error().map(|msg| view! {
                <p class="error-banner">{msg.to_string()}</p>
            })}
            {move || notice.get().map(|msg| view! { <p class="notice">{msg}</p> })}

            <Show when=move || edit_mode.get()>
                <form class="new-item-form" on:submit=add_place.clone()>
                    <input
                        type="text"
                        placeholder="Add new place"
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </form>
            </Show>

            <Show
                when=move || !store.places().read().is_loading() || !store.places().read().is_empty()
                fallback=|| view! { <p class="loading">"Finding places..."</p> }
            >
                <ul class="place-list">
                    {
                        let remove_place = remove_place.clone();
                        move || {
                            let entries = store.places().read().entries().to_vec();
                            entries.into_iter().map(|entry| {
                                let id = entry.local_id.clone();
                                let name = entry.place.name.clone();
                                let remove_place = remove_place.clone();
                                view! {
                                    <li class=state_class(entry.state)>
                                        <span class=entry.place.color.clone()>"●"</span>
                                        <span class="place-name">{entry.place.name.clone()}</span>
                                        {entry.place.ai_recommended.then(|| view! { <span class="badge">"AI"</span> })}
                                        {(entry.state == SyncState::Error).then(|| view! {
                                            <span class="sync-error" title="Could not save this place">"!"</span>
                                        })}
                                        <Show when=move || edit_mode.get()>
                                            <ConfirmRemove
                                                item_name=name.clone()
                                                locked=signed_out
                                                on_confirm={
                                                    let id = id.clone();
                                                    let remove_place = remove_place.clone();
                                                    move |_: ()| remove_place(id.clone())
                                                }
                                            />
                                        </Show>
                                    </li>
                                }
                            }).collect_view()
                        }
                    }
                </ul>
            </Show>

            <p class="map-center">
                {move || {
                    let center = store.places().read().map_center();
                    format!("Map centred at {:.4}, {:.4}", center.lat, center.lng)
                }}
            </p>
        </section>
    }
}
