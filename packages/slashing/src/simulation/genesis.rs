use std::cmp::Ordering;

use cosmwasm_std::{to_json_string, Decimal};
use rand::{Rng, RngCore};
use slashing_sim_utils::{rand_int_between, SimulationState};
use tracing::info;

use crate::error::SlashingError;
use crate::types::{validate_genesis, GenesisState, Params, MODULE_NAME};

// App param keys, shared with any other module of the run that reads them
pub const SIGNED_BLOCKS_WINDOW: &str = "signed_blocks_window";
pub const MIN_SIGNED_PER_WINDOW: &str = "min_signed_per_window";
pub const DOWNTIME_JAIL_DURATION: &str = "downtime_jail_duration";
pub const SLASH_FRACTION_DOUBLE_SIGN: &str = "slash_fraction_double_sign";
pub const SLASH_FRACTION_DOWNTIME: &str = "slash_fraction_downtime";

/// 10^18, one unit of `Decimal` in atomics
const DECIMAL_FRACTIONAL: u128 = 1_000_000_000_000_000_000;

/// 1/n at 18 decimal places, rounded half to even the way the chain's decimal division does.
/// `n` must be positive.
fn unit_fraction(n: u64) -> Decimal {
    // divide at 36 places, then chop back to 18
    let wide = DECIMAL_FRACTIONAL * DECIMAL_FRACTIONAL / u128::from(n);
    let quo = wide / DECIMAL_FRACTIONAL;
    let atomics = match (wide % DECIMAL_FRACTIONAL).cmp(&(DECIMAL_FRACTIONAL / 2)) {
        Ordering::Less => quo,
        Ordering::Greater => quo + 1,
        Ordering::Equal => quo + (quo & 1),
    };
    Decimal::raw(atomics)
}

/// Window size in [10, 1000) blocks
pub fn gen_signed_blocks_window<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rand_int_between(rng, 10, 1000)
}

/// One of 0.0, 0.1, ..., 0.9
pub fn gen_min_signed_per_window<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let tenths = rng.gen_range(0u64..10);
    Decimal::raw(u128::from(tenths) * (DECIMAL_FRACTIONAL / 10))
}

/// Jail time in [1 minute, 1 day), in seconds
pub fn gen_downtime_jail_duration<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rand_int_between(rng, 60, 60 * 60 * 24)
}

/// 1/n for n in [1, 50]
pub fn gen_slash_fraction_double_sign<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    unit_fraction(rng.gen_range(1u64..=50))
}

/// 1/n for n in [1, 200]
pub fn gen_slash_fraction_downtime<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    unit_fraction(rng.gen_range(1u64..=200))
}

/// Builds a random slashing genesis and stores it in `state.gen_state` under [`MODULE_NAME`].
///
/// Each parameter is looked up in the run's app params first; only missing ones are sampled,
/// in a fixed order, and recorded for the other modules. The unbonding time is copied from the
/// run as is.
pub fn randomized_gen_state<R: RngCore>(
    state: &mut SimulationState<R>,
) -> Result<(), SlashingError> {
    let signed_blocks_window =
        state.get_or_generate(SIGNED_BLOCKS_WINDOW, gen_signed_blocks_window)?;
    let min_signed_per_window =
        state.get_or_generate(MIN_SIGNED_PER_WINDOW, gen_min_signed_per_window)?;
    let downtime_jail_duration =
        state.get_or_generate(DOWNTIME_JAIL_DURATION, gen_downtime_jail_duration)?;
    let slash_fraction_double_sign =
        state.get_or_generate(SLASH_FRACTION_DOUBLE_SIGN, gen_slash_fraction_double_sign)?;
    let slash_fraction_downtime =
        state.get_or_generate(SLASH_FRACTION_DOWNTIME, gen_slash_fraction_downtime)?;

    let params = Params::new(
        state.unbond_time,
        signed_blocks_window,
        min_signed_per_window,
        downtime_jail_duration,
        slash_fraction_double_sign,
        slash_fraction_downtime,
    );
    let genesis = GenesisState::with_params(params);
    validate_genesis(&genesis)?;

    let params_json = to_json_string(&genesis.params)?;
    state.set_module_genesis(MODULE_NAME, &genesis)?;
    info!(
        params = %params_json,
        "Selected randomly generated slashing parameters:\n{}",
        genesis.params
    );
    Ok(())
}
