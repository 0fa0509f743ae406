use std::collections::BTreeSet;
use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Timestamp};

use crate::error::SlashingError;

pub const MODULE_NAME: &str = "slashing";

/// 21 days, in seconds
pub const DEFAULT_UNBONDING_TIME: u64 = 60 * 60 * 24 * 21;

#[cw_serde]
pub struct Params {
    /// Taken over from the staking unbonding time, in seconds
    pub unbonding_time: u64,
    /// Number of recent blocks over which signing is tracked
    pub signed_blocks_window: u64,
    /// Share of the window a validator must sign to avoid being jailed
    pub min_signed_per_window: Decimal,
    /// In seconds
    pub downtime_jail_duration: u64,
    pub slash_fraction_double_sign: Decimal,
    pub slash_fraction_downtime: Decimal,
}

impl Params {
    pub fn new(
        unbonding_time: u64,
        signed_blocks_window: u64,
        min_signed_per_window: Decimal,
        downtime_jail_duration: u64,
        slash_fraction_double_sign: Decimal,
        slash_fraction_downtime: Decimal,
    ) -> Self {
        Self {
            unbonding_time,
            signed_blocks_window,
            min_signed_per_window,
            downtime_jail_duration,
            slash_fraction_double_sign,
            slash_fraction_downtime,
        }
    }

    pub fn validate(&self) -> Result<(), SlashingError> {
        if self.unbonding_time == 0 {
            return Err(SlashingError::InvalidParams(
                "unbonding time must be positive".to_string(),
            ));
        }
        if self.signed_blocks_window == 0 {
            return Err(SlashingError::InvalidParams(
                "signed blocks window must be positive".to_string(),
            ));
        }
        if self.min_signed_per_window > Decimal::one() {
            return Err(SlashingError::InvalidParams(format!(
                "min signed per window too large: {}",
                self.min_signed_per_window
            )));
        }
        if self.downtime_jail_duration == 0 {
            return Err(SlashingError::InvalidParams(
                "downtime jail duration must be positive".to_string(),
            ));
        }
        if self.slash_fraction_double_sign > Decimal::one() {
            return Err(SlashingError::InvalidParams(format!(
                "double sign slash fraction too large: {}",
                self.slash_fraction_double_sign
            )));
        }
        if self.slash_fraction_downtime > Decimal::one() {
            return Err(SlashingError::InvalidParams(format!(
                "downtime slash fraction too large: {}",
                self.slash_fraction_downtime
            )));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            unbonding_time: DEFAULT_UNBONDING_TIME,
            signed_blocks_window: 100,
            min_signed_per_window: Decimal::percent(50),
            downtime_jail_duration: 60 * 10,
            slash_fraction_double_sign: Decimal::percent(5),
            slash_fraction_downtime: Decimal::percent(1),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slashing Params:")?;
        writeln!(f, "  UnbondingTime:           {}s", self.unbonding_time)?;
        writeln!(f, "  SignedBlocksWindow:      {}", self.signed_blocks_window)?;
        writeln!(f, "  MinSignedPerWindow:      {}", self.min_signed_per_window)?;
        writeln!(f, "  DowntimeJailDuration:    {}s", self.downtime_jail_duration)?;
        writeln!(f, "  SlashFractionDoubleSign: {}", self.slash_fraction_double_sign)?;
        write!(f, "  SlashFractionDowntime:   {}", self.slash_fraction_downtime)
    }
}

#[cw_serde]
pub struct ValidatorSigningInfo {
    /// Consensus address of the validator
    pub address: String,
    /// Height at which the validator started signing
    pub start_height: u64,
    /// Position in the signed blocks window
    pub index_offset: u64,
    pub jailed_until: Timestamp,
    pub tombstoned: bool,
    pub missed_blocks_counter: u64,
}

#[cw_serde]
pub struct SigningInfo {
    pub address: String,
    pub validator_signing_info: ValidatorSigningInfo,
}

#[cw_serde]
pub struct MissedBlock {
    /// Index inside the signed blocks window
    pub index: u64,
    pub missed: bool,
}

#[cw_serde]
pub struct ValidatorMissedBlocks {
    pub address: String,
    pub missed_blocks: Vec<MissedBlock>,
}

#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub params: Params,
    pub signing_infos: Vec<SigningInfo>,
    pub missed_blocks: Vec<ValidatorMissedBlocks>,
}

impl GenesisState {
    pub fn new(
        params: Params,
        signing_infos: Vec<SigningInfo>,
        missed_blocks: Vec<ValidatorMissedBlocks>,
    ) -> Self {
        Self {
            params,
            signing_infos,
            missed_blocks,
        }
    }

    /// Genesis with the given params and no signing history
    pub fn with_params(params: Params) -> Self {
        Self::new(params, vec![], vec![])
    }
}

/// Checks the params and that the signing history is consistent with them
pub fn validate_genesis(genesis: &GenesisState) -> Result<(), SlashingError> {
    genesis.params.validate()?;

    let mut seen = BTreeSet::new();
    for info in &genesis.signing_infos {
        if !seen.insert(info.address.as_str()) {
            return Err(SlashingError::InvalidGenesis(format!(
                "duplicate signing info for {}",
                info.address
            )));
        }
    }

    let mut seen = BTreeSet::new();
    for validator in &genesis.missed_blocks {
        if !seen.insert(validator.address.as_str()) {
            return Err(SlashingError::InvalidGenesis(format!(
                "duplicate missed blocks for {}",
                validator.address
            )));
        }
        if let Some(block) = validator
            .missed_blocks
            .iter()
            .find(|b| b.index >= genesis.params.signed_blocks_window)
        {
            return Err(SlashingError::InvalidGenesis(format!(
                "missed block index {} of {} outside signed blocks window",
                block.index, validator.address
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{from_json, to_json_binary};
    use test_case::test_case;

    use super::*;

    fn signing_info(address: &str) -> SigningInfo {
        SigningInfo {
            address: address.to_string(),
            validator_signing_info: ValidatorSigningInfo {
                address: address.to_string(),
                start_height: 1,
                index_offset: 3,
                jailed_until: Timestamp::from_seconds(0),
                tombstoned: false,
                missed_blocks_counter: 1,
            },
        }
    }

    fn missed(address: &str, indexes: &[u64]) -> ValidatorMissedBlocks {
        ValidatorMissedBlocks {
            address: address.to_string(),
            missed_blocks: indexes
                .iter()
                .map(|&index| MissedBlock {
                    index,
                    missed: true,
                })
                .collect(),
        }
    }

    #[test]
    fn default_genesis_is_valid() {
        let genesis = GenesisState::default();
        validate_genesis(&genesis).unwrap();
        assert!(genesis.signing_infos.is_empty());
        assert!(genesis.missed_blocks.is_empty());
    }

    #[test_case(Params { unbonding_time: 0, ..Params::default() }; "zero unbonding")]
    #[test_case(Params { signed_blocks_window: 0, ..Params::default() }; "zero window")]
    #[test_case(Params { min_signed_per_window: Decimal::percent(101), ..Params::default() }; "min signed over one")]
    #[test_case(Params { downtime_jail_duration: 0, ..Params::default() }; "zero jail")]
    #[test_case(Params { slash_fraction_double_sign: Decimal::percent(150), ..Params::default() }; "double sign over one")]
    #[test_case(Params { slash_fraction_downtime: Decimal::percent(200), ..Params::default() }; "downtime over one")]
    fn invalid_params_rejected(params: Params) {
        let err = params.validate().unwrap_err();
        assert!(matches!(err, SlashingError::InvalidParams(_)));
    }

    #[test]
    fn boundary_params_accepted() {
        let params = Params::new(
            1,
            1,
            Decimal::one(),
            1,
            Decimal::one(),
            Decimal::zero(),
        );
        params.validate().unwrap();
    }

    #[test]
    fn history_consistency() {
        let params = Params {
            signed_blocks_window: 10,
            ..Params::default()
        };

        let genesis = GenesisState::new(
            params.clone(),
            vec![signing_info("val1"), signing_info("val2")],
            vec![missed("val1", &[0, 9])],
        );
        validate_genesis(&genesis).unwrap();

        let genesis = GenesisState::new(
            params.clone(),
            vec![signing_info("val1"), signing_info("val1")],
            vec![],
        );
        let err = validate_genesis(&genesis).unwrap_err();
        assert!(matches!(err, SlashingError::InvalidGenesis(_)));

        let genesis = GenesisState::new(
            params.clone(),
            vec![],
            vec![missed("val1", &[1]), missed("val1", &[2])],
        );
        let err = validate_genesis(&genesis).unwrap_err();
        assert!(matches!(err, SlashingError::InvalidGenesis(_)));

        let genesis = GenesisState::new(params, vec![], vec![missed("val1", &[10])]);
        let err = validate_genesis(&genesis).unwrap_err();
        assert!(matches!(err, SlashingError::InvalidGenesis(_)));
    }

    #[test]
    fn display_lists_every_field() {
        let params = Params::new(
            DEFAULT_UNBONDING_TIME,
            250,
            Decimal::percent(30),
            3600,
            Decimal::from_ratio(1u64, 4u64),
            Decimal::from_ratio(1u64, 8u64),
        );
        let text = params.to_string();
        assert!(text.starts_with("Slashing Params:"));
        assert!(text.contains("UnbondingTime:           1814400s"));
        assert!(text.contains("SignedBlocksWindow:      250"));
        assert!(text.contains("MinSignedPerWindow:      0.3"));
        assert!(text.contains("DowntimeJailDuration:    3600s"));
        assert!(text.contains("SlashFractionDoubleSign: 0.25"));
        assert!(text.contains("SlashFractionDowntime:   0.125"));
    }

    #[test]
    fn genesis_json_round_trip() {
        let genesis = GenesisState::new(
            Params {
                slash_fraction_downtime: Decimal::from_ratio(1u64, 3u64),
                ..Params::default()
            },
            vec![signing_info("val1")],
            vec![missed("val1", &[4])],
        );
        let encoded = to_json_binary(&genesis).unwrap();
        let decoded: GenesisState = from_json(&encoded).unwrap();
        assert_eq!(decoded, genesis);
    }
}
