//! Persistence seam and the roster operations built on it.

mod memory;
mod service;
mod traits;

pub use memory::InMemoryStore;
pub use service::{BatchOutcome, RosterService};
pub use traits::RosterStore;
