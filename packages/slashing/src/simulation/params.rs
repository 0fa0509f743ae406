use slashing_sim_utils::ParamChange;

use super::genesis::{
    gen_min_signed_per_window, gen_signed_blocks_window, gen_slash_fraction_downtime,
};
use crate::types::MODULE_NAME;

pub const KEY_SIGNED_BLOCKS_WINDOW: &str = "SignedBlocksWindow";
pub const KEY_MIN_SIGNED_PER_WINDOW: &str = "MinSignedPerWindow";
pub const KEY_SLASH_FRACTION_DOWNTIME: &str = "SlashFractionDowntime";

/// Slashing params that random param change proposals may touch, with their generators.
/// Values are JSON strings, the way the params subspace stores them.
pub fn param_changes() -> Vec<ParamChange> {
    vec![
        ParamChange::new(MODULE_NAME, KEY_SIGNED_BLOCKS_WINDOW, |r| {
            format!("\"{}\"", gen_signed_blocks_window(r))
        }),
        ParamChange::new(MODULE_NAME, KEY_MIN_SIGNED_PER_WINDOW, |r| {
            format!("\"{}\"", gen_min_signed_per_window(r))
        }),
        ParamChange::new(MODULE_NAME, KEY_SLASH_FRACTION_DOWNTIME, |r| {
            format!("\"{}\"", gen_slash_fraction_downtime(r))
        }),
    ]
}
