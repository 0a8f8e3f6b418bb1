//! Confirm Remove Component
//!
//! Two-step removal for list rows. The prompt names the row, and the button
//! stays locked while removal is not allowed (for places: while signed out).

use leptos::prelude::*;

#[component]
pub fn ConfirmRemove(
    /// Shown in the prompt, e.g. "Remove Solang Valley?"
    #[prop(into)]
    item_name: String,
    #[prop(into)] locked: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = format!("Remove {}?", item_name);

    move || {
        if locked.get() {
            view! {
                <button class="delete-btn" disabled=true title="Sign in to remove">"×"</button>
            }
            .into_any()
        } else if asking.get() {
            view! {
                <span class="remove-prompt">
                    <span class="remove-prompt-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Remove"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title=prompt.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
