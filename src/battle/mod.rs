//! Battle system - per-planet Jedi vs Sith engagements
//!
//! Each planet keeps one queue per side. Whenever the strongest Sith on a
//! planet is at least as strong as the weakest Jedi there, the two fight and
//! the survivor (if any) goes back into its queue.

pub mod deployment;
pub mod general;
pub mod planet;
pub mod queue;
pub mod resolution;

pub use deployment::{Deployment, RawDeployment};
pub use general::General;
pub use planet::Planet;
pub use queue::BattalionQueue;
pub use resolution::{resolve_all, resolve_battle, BattleOutcome};
