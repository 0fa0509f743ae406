pub mod error;
pub mod simulation;
pub mod types;

pub use error::SlashingError;
pub use simulation::{randomized_gen_state, SlashingModule};
pub use types::{GenesisState, Params, MODULE_NAME};
