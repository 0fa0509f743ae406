use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Cannot decode app param {key}: {source}")]
    ParamDecode { key: String, source: StdError },

    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),
}
