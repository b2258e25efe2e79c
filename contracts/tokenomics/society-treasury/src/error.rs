use cosmwasm_std::{StdError, Timestamp, Uint128};
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

    #[error("No scheduled operation")]
    NoScheduledOperation {},

    #[error("Scheduled operation was already executed")]
    AlreadyExecuted {},

    #[error("Too early: payout eta is {eta}, now is {now}")]
    TooEarly { eta: Timestamp, now: Timestamp },

    #[error("Eta {eta} is out of range (max {max} seconds)")]
    InvalidEta { eta: u64, max: u64 },

    #[error("Eta {eta} is not in the future (now is {now})")]
    EtaInPast { eta: Timestamp, now: Timestamp },

    #[error("Insufficient balance: {balance} available, {amount} required")]
    InsufficientBalance { balance: Uint128, amount: Uint128 },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
