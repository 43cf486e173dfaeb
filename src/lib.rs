pub use catalog::{Catalog, Organizer};
pub use client::{CatalogClient, DEFAULT_LATENCY, LANDING_LATENCY};
pub use error::{EventraError, Result};
pub use model::*;
pub use pipeline::{derive_clubs, derive_events};
pub use status::{classify, EventStatus, RegistrationProgress};
pub use view::{ClubListing, EventDetail, EventListing, Landing};

pub mod catalog;
mod client;
pub mod display;
pub mod error;
pub(crate) mod model;
pub mod pipeline;
pub mod status;
pub(crate) mod utils;
pub mod view;
