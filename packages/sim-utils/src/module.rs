use std::fmt;

use rand::RngCore;

use crate::{SimError, SimulationState};

/// A module that can seed its own genesis for a simulation run.
pub trait SimulationModule {
    type Error: From<SimError>;

    /// Key of this module's entry in the genesis state
    fn name(&self) -> &str;

    /// Resolves the module's parameters through the run's [`crate::AppParams`] and writes the
    /// encoded genesis into `state.gen_state` under [`Self::name`].
    /// On error nothing is written for this module.
    fn generate_genesis_state(&self, state: &mut SimulationState) -> Result<(), Self::Error>;

    /// Parameters the simulator may change through random governance proposals
    fn param_changes(&self) -> Vec<ParamChange> {
        vec![]
    }
}

/// Describes how to produce a random new value for one module parameter.
/// `simulate` returns the value already JSON encoded, as a param change proposal carries it.
#[derive(Clone)]
pub struct ParamChange {
    pub subspace: String,
    pub key: String,
    pub simulate: fn(&mut dyn RngCore) -> String,
}

impl ParamChange {
    pub fn new(
        subspace: impl Into<String>,
        key: impl Into<String>,
        simulate: fn(&mut dyn RngCore) -> String,
    ) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
            simulate,
        }
    }

    pub fn compose_key(&self) -> String {
        format!("{}/{}", self.subspace, self.key)
    }

    pub fn simulate_value(&self, rng: &mut dyn RngCore) -> String {
        (self.simulate)(rng)
    }
}

impl fmt::Debug for ParamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamChange")
            .field("subspace", &self.subspace)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
