//! Galaxy Warfare - discrete-event Jedi vs Sith deployment simulator

pub mod battle;
pub mod core;
pub mod input;
pub mod simulation;
pub mod stats;
pub mod watcher;
