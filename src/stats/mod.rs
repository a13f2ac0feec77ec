//! Running statistics over battle losses

pub mod median;

pub use median::RunningMedian;
