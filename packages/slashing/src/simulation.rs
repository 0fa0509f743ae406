mod genesis;
mod params;

pub use genesis::{
    gen_downtime_jail_duration, gen_min_signed_per_window, gen_signed_blocks_window,
    gen_slash_fraction_double_sign, gen_slash_fraction_downtime, randomized_gen_state,
    DOWNTIME_JAIL_DURATION, MIN_SIGNED_PER_WINDOW, SIGNED_BLOCKS_WINDOW,
    SLASH_FRACTION_DOUBLE_SIGN, SLASH_FRACTION_DOWNTIME,
};
pub use params::{
    param_changes, KEY_MIN_SIGNED_PER_WINDOW, KEY_SIGNED_BLOCKS_WINDOW,
    KEY_SLASH_FRACTION_DOWNTIME,
};

use slashing_sim_utils::{ParamChange, SimulationModule, SimulationState};

use crate::error::SlashingError;
use crate::types::MODULE_NAME;

/// The slashing module as seen by the simulator
#[derive(Clone, Copy, Debug, Default)]
pub struct SlashingModule;

impl SimulationModule for SlashingModule {
    type Error = SlashingError;

    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn generate_genesis_state(&self, state: &mut SimulationState) -> Result<(), SlashingError> {
        randomized_gen_state(state)
    }

    fn param_changes(&self) -> Vec<ParamChange> {
        param_changes()
    }
}
