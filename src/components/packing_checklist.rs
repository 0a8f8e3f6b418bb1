//! Packing Checklist Component

use leptos::prelude::*;

use crate::components::ConfirmRemove;
use crate::store::{use_planner_store, PlannerStateStoreFields};

#[component]
pub fn PackingChecklist() -> impl IntoView {
    let store = use_planner_store();

    let (edit_mode, set_edit_mode) = signal(false);
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.packing().write().add(&new_text.get()).is_ok() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <section class="packing-checklist">
            <div class="section-header">
                <h1>"Packing Checklist"</h1>
                <span class="packed-count">
                    {move || {
                        let packing = store.packing().read();
                        format!("{}/{} packed", packing.packed_count(), packing.len())
                    }}
                </span>
                <button class="icon-btn" on:click=move |_| set_edit_mode.update(|v| *v = !*v)>"Edit"</button>
            </div>

            <Show when=move || edit_mode.get()>
                <form class="new-item-form" on:submit=add_item>
                    <input
                        type="text"
                        placeholder="Add item"
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </form>
            </Show>

            <ol class="packing-list">
                {move || {
                    let items = store.packing().read().items().to_vec();
                    items.into_iter().map(|item| {
                        let id = item.id;
                        let name = item.name.clone();
                        view! {
                            <li class=if item.packed { "packing-item packed" } else { "packing-item" }>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=item.packed
                                        on:change=move |_| {
                                            store.packing().write().toggle(id);
                                        }
                                    />
                                    <span class="item-number">{format!("{}.", id)}</span>
                                    <span class="item-name">{item.name.clone()}</span>
                                </label>
                                <Show when=move || edit_mode.get()>
                                    <ConfirmRemove
                                        item_name=name.clone()
                                        locked=Signal::stored(false)
                                        on_confirm=move |_: ()| {
                                            store.packing().write().remove(id);
                                        }
                                    />
                                </Show>
                            </li>
                        }
                    }).collect_view()
                }}
            </ol>
        </section>
    }
}
