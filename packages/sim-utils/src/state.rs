use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary};
use rand::RngCore;
use serde::{de::DeserializeOwned, Serialize};

use crate::{rand_util::seeded_rng, AppParams, SimError, SimRng};

/// Inputs for one simulation run
#[cw_serde]
pub struct SimConfig {
    pub seed: u64,
    /// Staking unbonding time, in seconds
    pub unbond_time: u64,
    /// Parameters fixed before any module generates its genesis
    #[serde(default)]
    pub params: AppParams,
}

impl SimConfig {
    pub fn new(seed: u64, unbond_time: u64) -> Self {
        Self {
            seed,
            unbond_time,
            params: AppParams::new(),
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.unbond_time == 0 {
            return Err(SimError::InvalidConfig(
                "unbond_time must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything the genesis generators of one run share: the random source, the
/// cross-module parameters, and the genesis being built (module name -> encoded genesis).
pub struct SimulationState<R = SimRng> {
    pub rng: R,
    pub app_params: AppParams,
    /// In seconds
    pub unbond_time: u64,
    pub gen_state: BTreeMap<String, Binary>,
}

impl SimulationState<SimRng> {
    pub fn new(seed: u64, unbond_time: u64) -> Self {
        Self::with_rng(seeded_rng(seed), unbond_time)
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut state = Self::new(config.seed, config.unbond_time);
        state.app_params = config.params.clone();
        Ok(state)
    }
}

impl<R: RngCore> SimulationState<R> {
    pub fn with_rng(rng: R, unbond_time: u64) -> Self {
        Self {
            rng,
            app_params: AppParams::new(),
            unbond_time,
            gen_state: BTreeMap::new(),
        }
    }

    /// Same contract as [`AppParams::get_or_generate`], drawing from this run's rng.
    pub fn get_or_generate<T, F>(&mut self, key: &str, generate: F) -> Result<T, SimError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut R) -> T,
    {
        self.app_params.get_or_generate(key, &mut self.rng, generate)
    }

    /// Encodes `genesis` and stores it as the genesis of `module`
    pub fn set_module_genesis<T: Serialize>(
        &mut self,
        module: &str,
        genesis: &T,
    ) -> Result<(), SimError> {
        let encoded = to_json_binary(genesis)?;
        self.gen_state.insert(module.to_string(), encoded);
        Ok(())
    }

    /// Decodes the genesis stored for `module`, if any
    pub fn module_genesis<T: DeserializeOwned>(&self, module: &str) -> Result<Option<T>, SimError> {
        Ok(self
            .gen_state
            .get(module)
            .map(|raw| from_json(raw))
            .transpose()?)
    }
}
