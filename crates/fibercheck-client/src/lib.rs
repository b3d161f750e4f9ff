pub mod client;
pub mod controller;
pub mod error;

pub use client::{CoverageClient, LookupOutcome};
pub use controller::{PendingLookup, SearchController, SearchState};
pub use error::LookupError;
