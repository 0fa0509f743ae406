mod app_params;
mod error;
mod module;
mod rand_util;
mod state;

pub use app_params::AppParams;
pub use error::SimError;
pub use module::{ParamChange, SimulationModule};
pub use rand_util::{rand_int_between, seeded_rng, SimRng};
pub use state::{SimConfig, SimulationState};
