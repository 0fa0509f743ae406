use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::SimError;

/// Parameters fixed for one simulation run, shared by every module taking part in it.
/// Values are kept JSON encoded, so any module can read a key back as its own type.
#[cw_serde]
#[derive(Default)]
pub struct AppParams(BTreeMap<String, Binary>);

impl AppParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or generates, stores and returns a new one.
    ///
    /// `generate` is only called (and only draws from `rng`) when the key is absent.
    /// Once a key is set, every later lookup in the run sees that same value.
    pub fn get_or_generate<T, R, F>(
        &mut self,
        key: &str,
        rng: &mut R,
        generate: F,
    ) -> Result<T, SimError>
    where
        T: Serialize + DeserializeOwned,
        R: ?Sized,
        F: FnOnce(&mut R) -> T,
    {
        if let Some(value) = self.get(key)? {
            debug!(key, "reusing app param");
            return Ok(value);
        }

        let value = generate(rng);
        self.insert(key, &value)?;
        debug!(key, "generated app param");
        Ok(value)
    }

    /// Decodes the value under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SimError> {
        self.0
            .get(key)
            .map(|raw| {
                from_json(raw).map_err(|source| SimError::ParamDecode {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Fixes `key` to `value`, replacing anything stored before.
    pub fn insert<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), SimError> {
        self.0.insert(key.into(), to_json_binary(value)?);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
