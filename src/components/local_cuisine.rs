//! Local Cuisine Component

use leptos::prelude::*;
use planner_core::domain::Star;

use crate::components::ConfirmRemove;
use crate::store::{use_planner_store, PlannerStateStoreFields};

fn star_class(star: Star) -> &'static str {
    match star {
        Star::Full => "star full",
        Star::Half => "star half",
        Star::Empty => "star empty",
    }
}

#[component]
pub fn LocalCuisine() -> impl IntoView {
    let store = use_planner_store();

    let (edit_mode, set_edit_mode) = signal(false);
    let (new_text, set_new_text) = signal(String::new());

    let add_cuisine = move || {
        let text = new_text.get();
        if store.cuisines().write().add(&text).is_ok() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <section class="local-cuisine">
            <div class="section-header">
                <h1>"Local Cuisines"</h1>
                <button class="icon-btn" on:click=move |_| set_edit_mode.update(|v| *v = !*v)>"Edit"</button>
            </div>

            <Show when=move || edit_mode.get()>
                <div class="new-item-row">
                    <input
                        type="text"
                        placeholder="Add new cuisine"
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_cuisine();
                            }
                        }
                    />
                    <button on:click=move |_| add_cuisine()>"+"</button>
                </div>
            </Show>

            <div class="cuisine-list">
                {move || {
                    let items = store.cuisines().read().items().to_vec();
                    items.into_iter().map(|dish| {
                        let id = dish.id;
                        let name = dish.name.clone();
                        view! {
                            <div class="cuisine-item">
                                <div class="cuisine-header">
                                    <h3>{dish.name.clone()}</h3>
                                    <div class="rating">
                                        {dish.stars().into_iter().map(|s| view! { <span class=star_class(s)>"★"</span> }).collect_view()}
                                        <span class="rating-value">{format!("{:.1}", dish.rating)}</span>
                                    </div>
                                    <Show when=move || edit_mode.get()>
                                        <ConfirmRemove
                                            item_name=name.clone()
                                            locked=Signal::stored(false)
                                            on_confirm=move |_: ()| {
                                                store.cuisines().write().remove(id);
                                            }
                                        />
                                    </Show>
                                </div>
                                <p class="description">{dish.description.clone()}</p>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}
