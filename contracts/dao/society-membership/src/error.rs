use cosmwasm_std::{Addr, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("{address} is already a member")]
    AlreadyMember { address: Addr },

    #[error("{address} is not a member")]
    NotAMember { address: Addr },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
