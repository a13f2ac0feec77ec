//! Movie watcher
//!
//! Finds, per planet, the most dramatic ambush and attack the deployment
//! stream made possible. Runs in the same single pass as the battles.

pub mod pairing;
pub mod tracker;

pub use pairing::{Pairing, PairingKind};
pub use tracker::MovieWatcher;
