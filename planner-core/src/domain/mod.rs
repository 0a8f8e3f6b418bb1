//! Domain Layer
//!
//! Entities and the error taxonomy shared by every other module.
//! This layer has NO I/O (serde and chrono only).

mod error;
mod trip;
mod place;
mod cuisine;
mod packing;
mod schedule;

pub use error::{ApiError, PlannerError, PlannerResult};
pub use trip::Trip;
pub use place::{GeoPoint, Place, PlaceId, RemotePlace};
pub use cuisine::{Cuisine, Star};
pub use packing::PackingItem;
pub use schedule::{EmailStatus, FeedbackSchedule};
