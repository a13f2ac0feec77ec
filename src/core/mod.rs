pub mod config;
pub mod error;
pub mod types;

pub use config::{GalaxyConfig, GeneratorConfig, SimulationOptions};
pub use error::{GalaxyError, Result};
pub use types::{GeneralId, PlanetId, Side, Timestamp};
