//! UI Components
//!
//! Trip planner screens built as Leptos components.

mod confirm_remove;
mod feedback_form;
mod local_cuisine;
mod nav_bar;
mod packing_checklist;
mod top_places;
mod trip_form;

pub use confirm_remove::ConfirmRemove;
pub use feedback_form::FeedbackForm;
pub use local_cuisine::LocalCuisine;
pub use nav_bar::NavBar;
pub use packing_checklist::PackingChecklist;
pub use top_places::TopPlaces;
pub use trip_form::TripForm;
