//! Application state for EcoStep
//!
//! This crate holds the shared state container: the signed-in user, the
//! theme flag and the Eco Points balance, mutated only through typed actions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;
pub mod store;

pub use session::{display_name, User};
pub use store::{reduce, Action, ActionRecord, AppState, AppStore, StoreEvent, DEFAULT_ECO_POINTS};
