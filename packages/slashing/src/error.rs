use cosmwasm_std::StdError;
use slashing_sim_utils::SimError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SlashingError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Sim(#[from] SimError),

    #[error("Invalid slashing params: {0}")]
    InvalidParams(String),

    #[error("Invalid slashing genesis: {0}")]
    InvalidGenesis(String),
}
