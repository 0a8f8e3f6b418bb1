//! Feedback Email Component
//!
//! Post-trip feedback email: schedule, manual send/reschedule, preview and
//! settings. Sending needs a signed-in user.

use leptos::prelude::*;
use planner_core::{EmailStatus, FeedbackEmail, FeedbackSettings, FeedbackTiming, User};

use crate::context::use_planner;
use crate::store::{use_planner_store, PlannerStateStoreFields};

fn status_dot(status: EmailStatus) -> &'static str {
    match status {
        EmailStatus::Sent => "status-dot sent",
        EmailStatus::Scheduled => "status-dot scheduled",
        EmailStatus::Error => "status-dot error",
        EmailStatus::Pending => "status-dot pending",
    }
}

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let ctx = use_planner();
    let store = use_planner_store();

    let (user, set_user) = signal(None::<User>);
    let (show_preview, set_show_preview) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    // Listen for authentication state changes while mounted
    let subscription = ctx.session.subscribe(move |u| set_user.set(u.cloned()));
    on_cleanup(move || drop(subscription));

    let status = move || store.feedback().read().status();
    let send_ctx = ctx.clone();
    let send_now = move |_: web_sys::MouseEvent| {
        let result = store.feedback().write().send_now(&send_ctx.session);
        match result {
            Ok(email) => set_notice.set(Some(format!("Feedback email sent to {}", email.recipient))),
            Err(e) => set_notice.set(Some(e.to_string())),
        }
    };
    let reschedule_ctx = ctx.clone();
    let reschedule = move |_: web_sys::MouseEvent| {
        store.feedback().write().reschedule(reschedule_ctx.clock.today());
        set_notice.set(None);
    };
    let settings_ctx = ctx.clone();
    let update_settings = move |change: &dyn Fn(&mut FeedbackSettings)| {
        let binding = store.feedback();
        let mut feedback = binding.write();
        let mut settings = feedback.settings();
        change(&mut settings);
        feedback.update_settings(settings, settings_ctx.clock.today());
    };
    let on_timing = update_settings.clone();
    let on_photos = update_settings.clone();
    let on_discount = update_settings;

    let preview = move || {
        let trip = store.trip().get();
        let recipient = user.get().and_then(|u| u.email).unwrap_or_default();
        FeedbackEmail::compose(&trip, &recipient, &store.feedback().read().settings())
    };

    view! {
        <section class="feedback-email">
            <h1>"Feedback Email System"</h1>

            <div class="feedback-card">
                <div class="trip-summary">
                    <p class="trip-title">{move || format!("Trip to {}", store.trip().get().destination)}</p>
                    <p class="trip-return">{move || format!("Return Date: {}", store.trip().get().return_date)}</p>
                    <p class="scheduled-for">
                        {move || format!(
                            "Email scheduled for: {}",
                            store.feedback().read().scheduled_date().map(|d| d.to_string()).unwrap_or_default()
                        )}
                    </p>
                </div>

                <div class="status-row">
                    <span class=move || status_dot(status())></span>
                    <span>{move || format!("Status: {}", status().label())}</span>
                    <button class="secondary-btn" on:click=move |_| set_show_preview.update(|v| *v = !*v)>
                        {move || if show_preview.get() { "Hide Preview" } else { "Show Preview" }}
                    </button>
                    <Show when=move || status() != EmailStatus::Sent>
                        <button
                            class="primary-btn"
                            disabled=move || user.get().is_none()
                            on:click=send_now.clone()
                        >
                            "Send Now"
                        </button>
                        <button
                            class="secondary-btn"
                            disabled=move || user.get().is_none()
                            on:click=reschedule.clone()
                        >
                            "Reschedule"
                        </button>
                    </Show>
                </div>
                {move || notice.get().map(|msg| view! { <p class="notice">{msg}</p> })}

                <Show when=move || show_preview.get()>
                    <div class="email-preview">
                        <p class="recipient">
                            {move || format!(
                                "Recipient: {}",
                                user.get().and_then(|u| u.email).unwrap_or_else(|| "Not signed in".to_string())
                            )}
                        </p>
                        <p class="subject">{move || format!("Subject: {}", preview().subject)}</p>
                        {move || preview().paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    </div>
                </Show>
            </div>

            <div class="email-settings">
                <h3>"Email Settings"</h3>
                <label>
                    "Timing: "
                    <select on:change=move |ev| {
                        let idx = event_target_value(&ev).parse::<usize>().unwrap_or(0);
                        let timing = FeedbackTiming::ALL.get(idx).copied().unwrap_or_default();
                        on_timing(&|s: &mut FeedbackSettings| s.timing = timing);
                    }>
                        {FeedbackTiming::ALL.iter().enumerate().map(|(i, timing)| {
                            let timing = *timing;
                            view! {
                                <option
                                    value=i.to_string()
                                    selected=move || store.feedback().read().settings().timing == timing
                                >
                                    {timing.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || store.feedback().read().settings().include_photo_upload
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            on_photos(&|s: &mut FeedbackSettings| s.include_photo_upload = checked);
                        }
                    />
                    "Include photo upload option"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || store.feedback().read().settings().include_discount_offer
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            on_discount(&|s: &mut FeedbackSettings| s.include_discount_offer = checked);
                        }
                    />
                    "Include discount offer for next trip"
                </label>
            </div>
        </section>
    }
}
